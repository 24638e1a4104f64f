use anyhow::Result;
use label_cleaner::{LabelFileCleaner, DEFAULT_DESTINATION};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let summary = LabelFileCleaner::default().run()?;
    debug!(%summary, "done");

    println!("Done! {} has been created.", DEFAULT_DESTINATION);
    Ok(())
}
