use std::io::Write;

fn main() -> anyhow::Result<()> {
    warehouse_observability::init();

    let config = warehouse_cli::DemoConfig::from_env()?;
    tracing::info!(recorder = config.recorder.as_str(), compact = config.compact, "starting demo");

    let recorder = config.recorder.build();
    let mut stdout = std::io::stdout();

    if let Err(err) = warehouse_cli::run_demo(recorder, &config, &mut stdout) {
        let _ = stdout.flush();
        tracing::error!(error = %err, "demo aborted");
        return Err(err);
    }

    Ok(())
}
