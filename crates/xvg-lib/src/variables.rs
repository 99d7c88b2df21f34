use serde::Serialize;

use crate::directive::Directive;

/// Series index reserved for the independent variable.
const INDEPENDENT: i64 = -1;

/// One named column before ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
struct VariableDescriptor {
    index: i64,
    description: String,
}

/// Names recovered from the plot directives of a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Variables {
    pub title: Option<String>,
    pub xaxis_label: Option<String>,
    pub yaxis_label: Option<String>,
    /// Column names in physical order; index 0 is the independent variable.
    pub names: Vec<String>,
}

impl Variables {
    /// Resolve variable names from raw directive lines.
    ///
    /// Legends (`sN legend`) name the dependent columns. A file without any
    /// legend is treated as a two-column file whose dependent variable is
    /// named by the y axis label.
    pub fn resolve<S: AsRef<str>>(directives: &[S]) -> Self {
        let mut vars = Variables::default();
        let mut descriptors = Vec::new();

        for line in directives {
            match Directive::parse(line.as_ref()) {
                Some(Directive::Title(text)) => vars.title = Some(text),
                Some(Directive::XAxisLabel(text)) => vars.xaxis_label = Some(text),
                Some(Directive::YAxisLabel(text)) => vars.yaxis_label = Some(text),
                Some(Directive::Legend { series, text }) => descriptors.push(VariableDescriptor {
                    index: series,
                    description: text,
                }),
                Some(Directive::Target { .. }) | None => {}
            }
        }

        descriptors.push(VariableDescriptor {
            index: INDEPENDENT,
            description: vars.xaxis_label.clone().unwrap_or_default(),
        });
        if descriptors.len() == 1 {
            descriptors.push(VariableDescriptor {
                index: 0,
                description: vars.yaxis_label.clone().unwrap_or_default(),
            });
        }

        descriptors.sort_by_key(|d| d.index);
        vars.names = descriptors.into_iter().map(|d| d.description).collect();
        vars
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Column index of the first variable called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}
