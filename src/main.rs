use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use word_scramble::cli::{CliInterface, parse_cli};
use word_scramble::logging::init_logging;
use word_scramble::{Game, game_loop, resolve_dictionary, resolve_word_list};

fn main() {
    let cli = parse_cli();
    init_logging(cli.verbose);

    let word_list = resolve_word_list(cli.start_words_path.as_deref());
    let dictionary = resolve_dictionary(cli.dictionary_path.as_deref());
    println!(
        "Loaded {} start words and {} dictionary words.",
        word_list.len(),
        dictionary.len()
    );

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut game = Game::new(word_list, dictionary, rng);
    let mut interface = CliInterface::new(io::stdin().lock());
    game_loop(&mut game, &mut interface);
}
