use clap::Parser;

use latest_jira_items::cli::{Cli, normalize};
use latest_jira_items::{USAGE_EXIT_CODE, app, util};

fn main() {
  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(e) => {
      let _ = e.print();
      std::process::exit(if e.use_stderr() { USAGE_EXIT_CODE } else { 0 });
    }
  };

  if cli.gen_man {
    match util::render_man_page::<Cli>() {
      Ok(page) => print!("{}", page),
      Err(e) => {
        eprintln!("{:#}", e);
        std::process::exit(1);
      }
    }
    return;
  }

  util::init_tracing(cli.verbose);

  // Phase 1: normalize CLI
  let cfg = normalize(cli);

  // Phase 2: credentials, fetch, aggregate, render
  let stdout = std::io::stdout();
  let mut out = stdout.lock();

  if let Err(e) = app::execute(&cfg, &mut out) {
    tracing::debug!(error = ?e, "run failed");
    println!("{}", e);
    std::process::exit(e.exit_code());
  }
}
