use crate::core::resolver::DEFAULT_MAX_REDIRECTS;
use crate::core::CheckRequest;
use crate::utils::error::{CheckError, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;

const MISSING_ARGUMENTS: &str = "Expects 'target url' and 'expected url' as first arguments";

#[derive(Debug, Clone, Parser)]
#[command(name = "redirect-check", version)]
#[command(about = "Checks that a URL still redirects to the expected final URL")]
pub struct CheckConfig {
    /// URL to request
    pub target_url: String,

    /// URL the redirect chain must end on
    pub expected_url: String,

    /// Host header to send with the initial request
    pub host: Option<String>,

    // anything past the host is accepted and ignored
    #[arg(hide = true)]
    pub extra: Vec<String>,

    #[arg(long, default_value_t = DEFAULT_MAX_REDIRECTS, help = "Maximum number of redirects to follow")]
    pub max_redirects: usize,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Parsed command line: either a check to run or text clap wants shown (help, version).
#[derive(Debug)]
pub enum Invocation {
    Run(CheckConfig),
    Display(String),
}

impl CheckConfig {
    pub fn try_from_args<I, T>(args: I) -> Result<Invocation>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(config) => Ok(Invocation::Run(config)),
            Err(e) => match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    Ok(Invocation::Display(e.to_string()))
                }
                ErrorKind::MissingRequiredArgument => Err(CheckError::usage(format!(
                    "{}\n{}",
                    MISSING_ARGUMENTS,
                    Self::command().render_usage()
                ))),
                _ => Err(CheckError::usage(format!(
                    "invalid arguments\n{}",
                    e.to_string().trim_end()
                ))),
            },
        }
    }

    pub fn request(&self) -> CheckRequest {
        CheckRequest {
            target_url: self.target_url.clone(),
            expected_url: self.expected_url.clone(),
            host_override: self.host.clone(),
        }
    }
}
