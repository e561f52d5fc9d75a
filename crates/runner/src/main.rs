use holiday_clock::SystemClock;
use holiday_core::label;
use holiday_monitor::ClockMonitor;
use holiday_runner::args::USAGE;
use holiday_runner::config::HOLIDAY_ENV;
use holiday_runner::{AnswerPresenter, Command, LineView, RunOptions, WatchConfig, parse_args};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries only the answer
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            eprintln!("{}", USAGE);
            return Ok(());
        }
        Ok(Command::Run(options)) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    let config = load_config(&options)?;
    log::info!("Watching for holiday {}", config.holiday);

    let monitor = ClockMonitor::new(config.holiday, Arc::new(SystemClock::new()));

    if options.once {
        answer_once(monitor).await
    } else {
        watch(monitor).await
    }
}

fn load_config(options: &RunOptions) -> Result<WatchConfig, Box<dyn std::error::Error>> {
    let env = std::env::var(HOLIDAY_ENV).ok();
    let config = WatchConfig::resolve(
        options.config_path.as_deref(),
        env.as_deref(),
        options.holiday.as_deref(),
    )?;
    Ok(config)
}

/// Print the first published answer and exit
async fn answer_once(mut monitor: ClockMonitor) -> Result<(), Box<dyn std::error::Error>> {
    let mut rx = monitor.subscribe();
    monitor.start()?;

    rx.changed().await?;
    let answer = *rx.borrow_and_update();
    monitor.shutdown().await?;

    if let Some(text) = label(answer) {
        println!("{}", text);
    }
    Ok(())
}

/// Keep the answer on screen until Ctrl-C
async fn watch(monitor: ClockMonitor) -> Result<(), Box<dyn std::error::Error>> {
    let mut presenter = AnswerPresenter::new(monitor);
    let render = presenter.bind(LineView::stdout())?;

    presenter.on_start()?;
    tokio::signal::ctrl_c().await?;
    log::info!("Interrupted, shutting down");

    presenter.shutdown().await?;

    // Dropping the presenter closes the answer cell and ends the render task
    drop(presenter);
    render.await?;
    Ok(())
}
