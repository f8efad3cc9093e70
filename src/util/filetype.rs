//! Source file classification by extension.

use strum::{AsRefStr, Display, EnumIter, EnumString, FromRepr};

/// Kinds of files the scanner treats differently.
///
/// Discriminants are stable and match the values other tools persist.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, EnumString, FromRepr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum FileType {
    Cls = 0,
    Example = 1,
    Go = 2,
    Java = 3,
    Javascript = 4,
    Php = 5,
    ObjectiveC = 6,
    Python = 7,
    Swift = 8,
    Terraform = 9,
    Yaml = 10,
    CSharp = 11,
    C = 12,
    Other = 13,
}

/// Classify `filename` by its final extension.
///
/// ```
/// use baseline_upgrade::util::filetype::{determine_file_type, FileType};
///
/// assert_eq!(determine_file_type("src/app.py"), FileType::Python);
/// assert_eq!(determine_file_type("config/prod.eyaml"), FileType::Yaml);
/// assert_eq!(determine_file_type("Makefile"), FileType::Other);
/// ```
pub fn determine_file_type(filename: &str) -> FileType {
    let Some(extension) = extension(filename) else {
        return FileType::Other;
    };
    match extension {
        "cls" => FileType::Cls,
        "example" => FileType::Example,
        "eyaml" | "yaml" | "yml" => FileType::Yaml,
        "go" => FileType::Go,
        "java" => FileType::Java,
        "js" => FileType::Javascript,
        "m" => FileType::ObjectiveC,
        "php" => FileType::Php,
        "py" | "pyi" => FileType::Python,
        "swift" => FileType::Swift,
        "tf" => FileType::Terraform,
        "cs" => FileType::CSharp,
        "c" => FileType::C,
        _ => FileType::Other,
    }
}

/// Text after the last `.` of the final path component.
///
/// Leading dots of the component never start an extension, so `.env` and
/// `..py` have none, and neither does a path ending in `/` or `/.`.
fn extension(filename: &str) -> Option<&str> {
    let name = filename.rsplit_once('/').map_or(filename, |(_, name)| name);
    let dot = name.rfind('.')?;
    if name[..dot].bytes().all(|b| b == b'.') {
        return None;
    }
    Some(&name[dot + 1..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn known_extensions() {
        let cases = [
            ("a.cls", FileType::Cls),
            ("settings.example", FileType::Example),
            ("main.go", FileType::Go),
            ("Main.java", FileType::Java),
            ("index.js", FileType::Javascript),
            ("view.m", FileType::ObjectiveC),
            ("index.php", FileType::Php),
            ("stub.pyi", FileType::Python),
            ("App.swift", FileType::Swift),
            ("main.tf", FileType::Terraform),
            ("ci.yml", FileType::Yaml),
            ("Program.cs", FileType::CSharp),
            ("lib.c", FileType::C),
        ];
        for (name, expected) in cases {
            assert_eq!(determine_file_type(name), expected, "{name}");
        }
    }

    #[test]
    fn only_last_extension_counts() {
        assert_eq!(determine_file_type("archive.py.bak"), FileType::Other);
        assert_eq!(determine_file_type("bundle.min.js"), FileType::Javascript);
    }

    #[test]
    fn dotfiles_and_case_are_other() {
        assert_eq!(determine_file_type(".py"), FileType::Other);
        assert_eq!(determine_file_type("..py"), FileType::Other);
        assert_eq!(determine_file_type("dir/app.py/"), FileType::Other);
        assert_eq!(determine_file_type("dir/app.py/."), FileType::Other);
        assert_eq!(determine_file_type("dir.py/Makefile"), FileType::Other);
        assert_eq!(determine_file_type("notes."), FileType::Other);
        assert_eq!(determine_file_type("README"), FileType::Other);
        assert_eq!(determine_file_type("SCRIPT.PY"), FileType::Other);
    }

    #[test]
    fn dots_inside_the_name_still_count() {
        assert_eq!(determine_file_type("..hidden.py"), FileType::Python);
        assert_eq!(determine_file_type("a..py"), FileType::Python);
        assert_eq!(determine_file_type("/abs/dir/.config.yml"), FileType::Yaml);
    }

    #[test]
    fn discriminants_are_stable() {
        let values: Vec<u8> = FileType::iter().map(|t| t as u8).collect();
        assert_eq!(values, (0..=13).collect::<Vec<u8>>());
        assert_eq!(FileType::from_repr(6), Some(FileType::ObjectiveC));
        assert_eq!(FileType::CSharp.to_string(), "C_SHARP");
        assert_eq!("OBJECTIVE_C".parse::<FileType>().unwrap(), FileType::ObjectiveC);
    }
}
