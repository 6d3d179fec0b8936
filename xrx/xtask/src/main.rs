mod logging_backend;

use pico_args::Arguments;
use std::path::PathBuf;
use xrx_xtask::*;

fn ok_or_exit(res: anyhow::Result<()>) {
    if let Err(e) = res {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn print_help() {
    println!(
        r#"
cargo xtask
Registry code generation for the xrx workspace.

USAGE:
    cargo xtask <SUBCOMMAND> [FLAG] [ARGS]

SUBCOMMANDS:
    gen-reflection              Regenerate the structure type reflection table
    gen-interaction-profiles    Regenerate the interaction profile metadata table
    gen-all                     Regenerate all checked-in generated files
    check-gen                   Fail if any checked-in generated file is stale

FLAGS:
    --verbose                   Log debug information
    --help                      Print this text

ARGS:
    --registry <PATH>           Registry document to generate from.
                                Default: <workspace>/registry/xr.xml
"#
    );
}

fn main() {
    let mut args = Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print_help();
        return;
    }

    logging_backend::init_logging(args.contains("--verbose"));
    xrx_common::set_panic_hook();

    if let Ok(Some(subcommand)) = args.subcommand() {
        let registry_path = args
            .opt_value_from_str::<_, PathBuf>("--registry")
            .unwrap()
            .unwrap_or_else(default_registry_path);

        if args.finish().is_empty() {
            match subcommand.as_str() {
                "gen-reflection" => ok_or_exit(gen_reflection(&registry_path)),
                "gen-interaction-profiles" => ok_or_exit(gen_interaction_profiles(&registry_path)),
                "gen-all" => ok_or_exit(gen_all(&registry_path)),
                "check-gen" => ok_or_exit(check_gen(&registry_path)),
                _ => {
                    println!("\nUnrecognized subcommand.");
                    print_help();
                    return;
                }
            }
        } else {
            println!("\nWrong arguments.");
            print_help();
            return;
        }
    } else {
        println!("\nMissing subcommand.");
        print_help();
        return;
    }

    println!("\nDone\n");
}
