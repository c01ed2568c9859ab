use agenda::core::cli::{CliPaths, USAGE};
use agenda::core::context::AppContext;
use agenda::logging::LogTarget;
use agenda::prompter::flows::main_flow::MainFlow;
use agenda::prompter::prompter::Prompter;

fn main() {
    if std::env::args().skip(1).any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return;
    }

    let paths = match CliPaths::from_env() {
        Ok(paths) => paths,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };
    let mut ctx =
        match AppContext::new_with_paths(paths.config_path, paths.events_path, paths.logs_dir) {
            Ok(ctx) => ctx,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        };
    let prompter = Prompter::new();
    let flow = MainFlow::new(&mut ctx);

    if let Err(err) = prompter.run(flow, false) {
        ctx.logger.error(format!("{err}"), LogTarget::ConsoleAndFile);
        std::process::exit(1);
    }
}
