// SPDX-License-Identifier: MPL-2.0
use appshots::app::{self, paths, Flags};
use appshots::logging;

const HELP: &str = "\
appshots - screenshot carousel and gallery for GitHub-published collections

USAGE:
    appshots [OPTIONS]

OPTIONS:
    --owner <OWNER>        Repository owner
    --repo <REPO>          Repository name
    --page-url <URL>       GitHub Pages URL the collection is published on
    --preview <PLATFORM>   Initially previewed platform (tvos, macos, ios)
    --gallery <PLATFORM>   Initial gallery platform (tvos, macos, ios)
    --lang <LOCALE>        Interface language (e.g. en-US, fr)
    --config-dir <DIR>     Directory holding settings.toml
    --log-level <FILTER>   Log filter (e.g. debug, appshots=trace)
    -h, --help             Print this help
";

fn parse_args() -> Result<(Flags, Option<String>), pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        owner: args.opt_value_from_str("--owner")?,
        repo: args.opt_value_from_str("--repo")?,
        page_url: args.opt_value_from_str("--page-url")?,
        preview: args.opt_value_from_str("--preview")?,
        gallery: args.opt_value_from_str("--gallery")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };
    let log_level = args.opt_value_from_str("--log-level")?;

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {remaining:?}");
    }

    Ok((flags, log_level))
}

fn main() -> iced::Result {
    let (flags, log_level) = match parse_args() {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    logging::init(log_level.as_deref());
    paths::init_cli_overrides(flags.config_dir.clone());

    app::run(flags)
}
