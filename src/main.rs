use redirect_check::utils::logger;
use redirect_check::{CheckConfig, HttpResolver, Invocation, RedirectCheck, Report};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match CheckConfig::try_from_args(std::env::args_os()) {
        Ok(Invocation::Run(config)) => config,
        Ok(Invocation::Display(text)) => {
            print!("{}", text);
            return ExitCode::SUCCESS;
        }
        Err(e) => return dispatch(Err(e)),
    };

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let request = config.request();
    let verdict = match HttpResolver::with_max_redirects(config.max_redirects) {
        Ok(resolver) => RedirectCheck::new(resolver)
            .run(&request)
            .await
            .and_then(|result| result.into_verdict(&request)),
        Err(e) => Err(e),
    };

    dispatch(verdict)
}

// The only place the outcome turns into output and an exit status.
fn dispatch(verdict: redirect_check::Result<String>) -> ExitCode {
    if let Err(e) = &verdict {
        tracing::debug!("Check failed ({:?}): {:?}", e.category(), e);
    }

    let report = Report::from_verdict(&verdict);
    println!("{}", report.message);
    ExitCode::from(report.exit_code)
}
