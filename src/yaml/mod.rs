//! YAML parsing and error handling

pub mod parser;

pub use parser::{parse_yaml, parse_yaml_file, YamlError};
