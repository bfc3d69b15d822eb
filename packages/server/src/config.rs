//! Server configuration assembled from the command line.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{MAX_MESSAGES, MAX_SCORES, SESSION_TIMEOUT_SECS, SessionTimeout};

/// Command line arguments of `balloon-server`
#[derive(Parser, Debug)]
#[command(name = "balloon-server")]
#[command(about = "Backend for the Balloon party site", long_about = None)]
pub struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Directory containing index.html, css/, js/ and assets/
    #[arg(long, default_value = ".")]
    pub static_dir: PathBuf,

    /// JSON file mapping page names to passwords (re-read on every unlock attempt)
    #[arg(long, default_value = "page_passwords.json")]
    pub page_passwords: PathBuf,

    /// JSON file overriding the built-in site configuration served at /api/config
    #[arg(long)]
    pub site_config: Option<PathBuf>,

    /// Idle seconds after which a session expires
    #[arg(long, default_value_t = SESSION_TIMEOUT_SECS)]
    pub session_timeout_secs: u64,

    /// Maximum number of scores kept on the leaderboard
    #[arg(long, default_value_t = MAX_SCORES)]
    pub max_scores: usize,

    /// Maximum number of guestbook messages kept
    #[arg(long, default_value_t = MAX_MESSAGES)]
    pub max_messages: usize,
}

/// サーバー全体の設定
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 静的ファイルのルート
    pub static_dir: PathBuf,
    /// ページパスワードの JSON ファイル（照合のたびに読み直す）
    pub page_passwords_path: PathBuf,
    /// サイト設定の JSON ファイル（`None` なら組み込みの設定）
    pub site_config_path: Option<PathBuf>,
    pub session_timeout: SessionTimeout,
    pub max_scores: usize,
    pub max_messages: usize,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            static_dir: args.static_dir,
            page_passwords_path: args.page_passwords,
            site_config_path: args.site_config,
            session_timeout: SessionTimeout::from_secs(args.session_timeout_secs),
            max_scores: args.max_scores,
            max_messages: args.max_messages,
        }
    }
}
