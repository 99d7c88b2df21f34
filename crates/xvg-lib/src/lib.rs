//! Reader for xvg plotting-data files.
//!
//! An xvg file mixes `#` comments, `@` plot directives, `&` series
//! boundaries and whitespace-separated numeric rows. [`read`] returns the
//! numeric content as a [`DataMatrix`] whose columns can be selected and
//! reordered by variable name:
//!
//! ```no_run
//! let data = xvg_lib::read("ss.xvg", Some(&["Coil", "Time (ps)"]), false)?;
//! println!("{} rows", data.nrows());
//! # Ok::<(), xvg_lib::XvgError>(())
//! ```
//!
//! Variable names come from `@ sN legend` directives, or from the axis
//! labels for plain two-column files. Files that write each series as its
//! own `x y` block are reassembled into one matrix sharing the x column.

use std::path::Path;

pub mod blocks;
pub mod directive;
pub mod error;
pub mod file;
pub mod header;
pub mod layout;
pub mod line;
pub mod matrix;
pub mod options;
pub mod text;
pub mod variables;

pub use error::{Result, XvgError};
pub use file::XvgFile;
pub use layout::{FileKind, Layout};
pub use matrix::DataMatrix;
pub use options::{ReadOptions, UnknownVariablePolicy};

/// Read the data of an xvg file.
///
/// With `variable_names`, only those columns are returned, in that order;
/// names the file does not define are left out. With `unpack`, the result
/// is transposed so each variable is a row.
pub fn read(
    path: impl AsRef<Path>,
    variable_names: Option<&[&str]>,
    unpack: bool,
) -> Result<DataMatrix> {
    let mut options = ReadOptions::new().with_unpack(unpack);
    if let Some(names) = variable_names {
        options = options.with_variables(names.iter().copied());
    }
    read_with(path, &options)
}

/// Read the data of an xvg file as described by `options`.
pub fn read_with(path: impl AsRef<Path>, options: &ReadOptions) -> Result<DataMatrix> {
    let data = XvgFile::open(path, options.clone())?.into_data()?;
    Ok(if options.unpack {
        data.transpose()
    } else {
        data
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn sample_path(relative: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .and_then(|p| p.parent())
            .expect("workspace root")
            .join(relative)
    }

    fn write_xvg(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(text.as_bytes()).expect("write temp file");
        file
    }

    fn all_samples() -> Vec<PathBuf> {
        ["f0.xvg", "f1.xvg", "f2.xvg", "f2_uniform.xvg"]
            .iter()
            .map(|name| sample_path(&format!("test_data/{name}")))
            .collect()
    }

    #[test]
    fn scenario_two_column_axis_labels() {
        let path = sample_path("test_data/f0.xvg");
        let data = read(&path, None, false).unwrap();
        assert_eq!(
            data.to_rows(),
            vec![vec![0.0, 10.0], vec![1.0, 12.0], vec![2.0, 15.0]]
        );
        let f = XvgFile::open(&path, ReadOptions::default()).unwrap();
        assert_eq!(f.variables(), ["Time (ps)", "Angle (degrees)"]);
    }

    #[test]
    fn scenario_legend_selection() {
        let file = write_xvg(
            "@    xaxis  label \"Time (ps)\"\n\
             @ s0 legend \"Coil\"\n\
             @ s1 legend \"B-Sheet\"\n\
             0 1 2\n\
             1 3 4\n",
        );
        let data = read(file.path(), Some(&["B-Sheet", "Time (ps)"]), false).unwrap();
        assert_eq!(data.to_rows(), vec![vec![2.0, 0.0], vec![4.0, 1.0]]);
    }

    #[test]
    fn scenario_multi_block_unfiltered() {
        let file = write_xvg(
            "@ xaxis label \"x\"\n@ s0 legend \"a\"\n@ s1 legend \"b\"\n\
             @target G0.S0\n0 5\n1 6\n&\n\
             @target G0.S1\n0 7\n1 8\n&\n",
        );
        let data = read(file.path(), None, false).unwrap();
        assert_eq!(data.to_rows(), vec![vec![0.0, 5.0, 7.0], vec![1.0, 6.0, 8.0]]);
    }

    #[test]
    fn full_name_list_matches_unfiltered_read() {
        for path in all_samples() {
            let f = XvgFile::open(&path, ReadOptions::default()).unwrap();
            let names: Vec<&str> = f.variables().iter().map(String::as_str).collect();
            let all = read(&path, None, false).unwrap();
            let named = read(&path, Some(names.as_slice()), false).unwrap();
            assert_eq!(all, named, "{}", path.display());
        }
    }

    #[test]
    fn selection_is_a_column_permutation() {
        let path = sample_path("test_data/f1.xvg");
        let all = read(&path, None, false).unwrap();
        let picked = read(&path, Some(&["Coil", "B-Sheet", "Time (ps)"]), false).unwrap();
        assert_eq!(picked.ncols(), 3);
        assert_eq!(picked.column(0), all.column(2));
        assert_eq!(picked.column(1), all.column(3));
        assert_eq!(picked.column(2), all.column(0));
    }

    #[test]
    fn duplicate_names_repeat_columns() {
        let path = sample_path("test_data/f1.xvg");
        let picked = read(&path, Some(&["Coil", "Coil"]), false).unwrap();
        assert_eq!(picked.column(0), picked.column(1));
    }

    #[test]
    fn unpack_is_transpose() {
        for path in all_samples() {
            let rows = read(&path, None, false).unwrap();
            let cols = read(&path, None, true).unwrap();
            assert_eq!(cols, rows.transpose(), "{}", path.display());
            assert_eq!(cols.to_rows(), rows.columns());
        }
    }

    #[test]
    fn uniform_and_block_files_agree() {
        let blocks = read(sample_path("test_data/f2.xvg"), None, false).unwrap();
        let uniform = read(sample_path("test_data/f2_uniform.xvg"), None, false).unwrap();
        assert!(blocks.approx_eq(&uniform, 1e-12));

        let request: &[&str] = &["res2_TRP", "Time (ps)", "res0_ACE"];
        let blocks = read(sample_path("test_data/f2.xvg"), Some(request), false).unwrap();
        let uniform = read(sample_path("test_data/f2_uniform.xvg"), Some(request), false).unwrap();
        assert!(blocks.approx_eq(&uniform, 1e-12));
        assert_eq!(blocks.row(1), Some(&[171.5, 1.0, 6.0][..]));
    }

    #[test]
    fn unknown_name_is_silently_dropped() {
        let path = sample_path("test_data/f0.xvg");
        let data = read(&path, Some(&["Angle (degrees)", "Structure"]), false).unwrap();
        assert_eq!(data.shape(), (3, 1));
        assert_eq!(data.column(0), Some(vec![10.0, 12.0, 15.0]));

        let none = read(&path, Some(&["Structure"]), false).unwrap();
        assert_eq!(none.shape(), (0, 0));
    }

    #[test]
    fn strict_options_reject_unknown_names() {
        let opts = ReadOptions::new().with_variables(["Structure"]).strict();
        let err = read_with(sample_path("test_data/f0.xvg"), &opts).unwrap_err();
        assert!(matches!(err, XvgError::UnknownVariable { .. }));
    }

    #[test]
    fn first_row_may_carry_a_comment() {
        let file = write_xvg("@ xaxis label \"t\"\n@ yaxis label \"v\"\n0 10 # start\n1 12\n");
        let data = read(file.path(), None, false).unwrap();
        assert_eq!(data.to_rows(), vec![vec![0.0, 10.0], vec![1.0, 12.0]]);
    }

    #[test]
    fn full_scan_option_reaches_the_reader() {
        let path = sample_path("test_data/legends_after_data.xvg");
        let opts = ReadOptions::new()
            .with_variables(["Coil"])
            .with_header_on_top(false);
        let data = read_with(&path, &opts).unwrap();
        assert_eq!(data.to_rows(), vec![vec![5.0], vec![4.0]]);

        let top = ReadOptions::new().with_variables(["Coil"]);
        assert_eq!(read_with(&path, &top).unwrap().shape(), (0, 0));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read("/no/such/dir/file.xvg", None, false).unwrap_err();
        assert!(matches!(err, XvgError::Io { .. }));
    }
}
