use chrono::Utc;

use claude_menubar::cli::Args;
use claude_menubar::config::{self, Credentials};
use claude_menubar::display;
use claude_menubar::usage_api::{FetchOutcome, UsageClient};

// Every branch prints a menu and exits zero: the plugin host renders
// stdout as-is and re-runs the binary on its own schedule.
fn main() {
    let args = Args::parse();

    let Some(paths) = config::resolve_paths(args.config.as_deref()) else {
        print!("{}", display::build_home_error());
        return;
    };

    let env = match config::load_env(&paths.file) {
        Ok(env) => env,
        Err(err) => {
            if args.debug {
                eprintln!("config: {err:#}");
            }
            print!("{}", display::build_config_missing(&paths));
            return;
        }
    };

    let Some(creds) = Credentials::from_env(&env) else {
        print!("{}", display::build_config_incomplete(&paths.file));
        return;
    };

    let client = UsageClient::new();
    if args.debug {
        eprintln!("GET {}", client.endpoint(&creds.org_id));
    }

    let outcome = client.fetch(&creds);
    if args.debug {
        eprintln!("classified: {outcome:?}");
    }

    let menu = match outcome {
        FetchOutcome::NetworkError => display::build_network_error(),
        FetchOutcome::AuthError => display::build_auth_error(&paths.file),
        FetchOutcome::Unavailable => display::build_unavailable(),
        FetchOutcome::Ok(snapshot) => display::build_usage(&snapshot, &paths.file, Utc::now()),
    };
    print!("{menu}");
}
