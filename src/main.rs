use log::error;
use resolute::io::{exit, input, output};
use resolute::options::Options;
use resolute::prover::Prover;
use std::fs::File;
use std::io::BufWriter;

fn main() {
    let options = Options::parse();
    resolute::io::log::start_logging(options.log_level());

    let problem = input::load(&options.path).unwrap_or_else(|err| {
        error!("{}: {}", options.path.display(), err);
        exit::failure()
    });
    let answers = Prover::new(&problem, options.time_limit).prove_all();

    let written = match &options.output {
        Some(path) => File::create(path).and_then(|file| {
            output::write_answers(BufWriter::new(file), &answers)
        }),
        None => output::write_answers(std::io::stdout(), &answers),
    };
    if let Err(err) = written {
        error!("failed to write answers: {}", err);
        exit::failure()
    }
    exit::success()
}
