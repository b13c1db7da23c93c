use iced_scribe::app::{self, paths, Flags};

const HELP: &str = "\
Scribe - translation drafting for transcribed content

USAGE:
  iced_scribe [OPTIONS] [PROJECT]

OPTIONS:
  --lang <LOCALE>      Override the interface language (e.g. fr)
  --i18n-dir <DIR>     Load translations from this directory instead of the built-in ones
  --config-dir <DIR>   Read and write the configuration under this directory
  --data-dir <DIR>     Keep application state under this directory
  -h, --help           Print this help and exit
  -V, --version        Print the version and exit

ARGS:
  <PROJECT>            Project file to open on startup
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }
    if args.contains(["-V", "--version"]) {
        println!("iced_scribe {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        i18n_dir: args.opt_value_from_str("--i18n-dir").unwrap(),
        data_dir: args.opt_value_from_str("--data-dir").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
        project_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    // Directory overrides must be in place before anything reads the
    // config or state files.
    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    app::run(flags)
}
