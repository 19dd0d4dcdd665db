//! Command-line parsing.
//!
//! Flags follow the single-dash style the renderer's users already know:
//! `-path=/models/cube.obj`, `-path /models/cube.obj` and `--path ...` are
//! all accepted. Parsing stops at the first argument that is not a flag.

use std::path::PathBuf;

use kani_config::ThreadMode;

use crate::error::ConfigurationError;

/// Flags as given on the command line, before config and defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cli {
    pub path: Option<String>,
    pub file_type: Option<String>,
    pub mode: Option<String>,
    pub library: Option<PathBuf>,
    pub thread: Option<ThreadMode>,
    pub quiet: bool,
    /// Arguments left over after the last flag.
    pub rest: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Launch(Cli),
    Help,
}

pub fn parse<I, S>(args: I) -> Result<Command, ConfigurationError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut cli = Cli::default();

    while let Some(arg) = args.next() {
        if arg == "--" {
            break;
        }
        if arg.len() < 2 || !arg.starts_with('-') {
            cli.rest.push(arg);
            break;
        }

        let body = arg.strip_prefix("--").unwrap_or(&arg[1..]);
        if body.is_empty() || body.starts_with('-') || body.starts_with('=') {
            return Err(ConfigurationError::BadSyntax(arg));
        }

        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name.to_string(), Some(value.to_string())),
            None => (body.to_string(), None),
        };

        match name.as_str() {
            "h" | "help" => return Ok(Command::Help),
            "quiet" => {
                cli.quiet = match inline {
                    Some(value) => parse_bool(&name, &value)?,
                    None => true,
                };
            }
            "path" | "type" | "mode" | "lib" | "thread" => {
                let value = match inline {
                    Some(value) => value,
                    None => args
                        .next()
                        .ok_or_else(|| ConfigurationError::MissingValue(name.clone()))?,
                };
                match name.as_str() {
                    "path" => cli.path = Some(value),
                    "type" => cli.file_type = Some(value),
                    "mode" => cli.mode = Some(value),
                    "lib" => cli.library = Some(PathBuf::from(value)),
                    _ => {
                        let thread = value.parse::<ThreadMode>().map_err(|reason| {
                            ConfigurationError::InvalidValue {
                                flag: name.clone(),
                                value: value.clone(),
                                reason,
                            }
                        })?;
                        cli.thread = Some(thread);
                    }
                }
            }
            _ => return Err(ConfigurationError::UnknownFlag(name)),
        }
    }

    cli.rest.extend(args);
    Ok(Command::Launch(cli))
}

fn parse_bool(flag: &str, value: &str) -> Result<bool, ConfigurationError> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(ConfigurationError::InvalidValue {
            flag: flag.to_string(),
            value: value.to_string(),
            reason: "expected a boolean".to_string(),
        }),
    }
}

/// Help text printed for `-h` and after flag errors.
pub fn usage() -> String {
    format!(
        "Usage: kani -path=/path/to/your.obj [flags]\n\
         \n\
         Flags:\n\
         \x20 -path string\n\
         \x20       enter file path (required)\n\
         \x20 -type string\n\
         \x20       enter file type (default \"opengl\")\n\
         \x20 -mode string\n\
         \x20       enter window mode (default \"fullscreen\")\n\
         \x20 -lib string\n\
         \x20       renderer library file or directory (default: search for {})\n\
         \x20 -thread string\n\
         \x20       thread that runs the renderer, main or dedicated (default \"main\")\n\
         \x20 -quiet\n\
         \x20       do not print the controls banner\n",
        kani_ffi::RendererLibrary::library_name()
    )
}
