// SPDX-License-Identifier: MPL-2.0
use emotion_lens::app::{self, paths, Flags};
use emotion_lens::i18n::I18n;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("emotion_lens=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    let show_help = args.contains(["-h", "--help"]);

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };

    if show_help {
        print_help(flags.lang.as_deref());
        return Ok(());
    }

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        seed: args.opt_value_from_str("--seed")?,
    })
}

fn print_help(lang: Option<&str>) {
    let i18n = I18n::new(lang, None);
    println!("{}", i18n.tr("help-usage"));
    println!();
    println!("{}", i18n.tr("help-options"));
    for (option, key) in [
        ("-h, --help", "help-option-help"),
        ("--lang <ID>", "help-option-lang"),
        ("--config-dir <DIR>", "help-option-config-dir"),
        ("--seed <N>", "help-option-seed"),
    ] {
        println!("  {option:<20} {}", i18n.tr(key));
    }
}
