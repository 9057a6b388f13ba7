// ============================================
// src/main.rs (メインファイル)
// ============================================

use std::error::Error;
use std::fs::{self, OpenOptions};
use std::io::{self, Write, stdout};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

mod answer;
mod app;
mod clock;
mod config;
mod grammar;
mod lexicon;
mod panel;
mod quiz;
mod templates;
mod topics;
mod ui;
mod vocab;

use app::AppState;
use clock::ClockTime;
use config::Settings;
use topics::Topic;
use ui::ui;

use crossterm::{
    ExecutableCommand,
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

use ratatui::prelude::*;

/// Guía de Español: an interactive beginner Spanish study guide.
#[derive(Parser, Debug)]
#[command(name = "guia", version, about)]
struct Args {
    /// Topic to open on start (e.g. topic-time, por-para)
    #[arg(short, long)]
    topic: Option<Topic>,

    /// Seed for the question draws
    #[arg(long)]
    seed: Option<u64>,

    /// Config file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the Spanish phrase for a time and exit (e.g. 2:40)
    #[arg(long, value_name = "H:MM")]
    say_time: Option<ClockTime>,

    /// List the topic ids and exit
    #[arg(long)]
    list_topics: bool,
}

// --------------------------------------------------
// メイン関数 (TUIセットアップと実行ループ)
// --------------------------------------------------

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if args.list_topics {
        for t in Topic::ALL {
            println!("{:<22} {} ({})", t.id(), t.title(), t.subtitle());
        }
        return Ok(());
    }
    if let Some(time) = args.say_time {
        println!("{}", time.phrase());
        return Ok(());
    }

    let settings = Settings::load(args.config.as_deref())?;
    init_logging(&settings.log_path());

    let start = args.topic.unwrap_or(settings.start_topic);
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let app_state = AppState::new(start, rng, settings.delay_scale);
    let poll = Duration::from_millis(settings.poll_interval_ms);

    let mut terminal = setup_terminal()?;
    // ループがエラーでも端末は必ず元に戻す
    let result = run_app(&mut terminal, app_state, poll);
    restore_terminal(&mut terminal)?;
    result?;
    Ok(())
}

/// ログはファイルに出す (画面は TUI が使うため)
fn init_logging(path: &Path) {
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("warning: logging disabled ({}): {}", path.display(), e);
            return;
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn setup_terminal() -> io::Result<Terminal<impl Backend>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?; // 代替スクリーンを使用
    stdout().execute(Hide)?; // カーソルを非表示
    let backend = CrosstermBackend::new(stdout());
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
    terminal.show_cursor()?;
    stdout().execute(Show)?; // カーソルを再表示
    stdout().execute(LeaveAlternateScreen)?; // 代替スクリーンを終了
    disable_raw_mode()?;
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<impl Backend>,
    mut app_state: AppState,
    poll: Duration,
) -> io::Result<()> {
    log::info!("session started on {}", app_state.topic);

    loop {
        terminal.draw(|f| ui(f, &app_state))?;

        if event::poll(poll)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app_state.handle_key(key, Instant::now());
                }
            }
        }

        // 回答後の「次の問題へ」を確認
        app_state.tick(Instant::now());

        if app_state.should_quit {
            break;
        }
    }

    app_state.panel.teardown();
    log::info!("session ended on {}", app_state.topic);
    Ok(())
}
