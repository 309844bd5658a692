use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use rand::Rng;
use rs_wordle_game::*;
use std::fs::File;
use std::io::{self, BufRead, Write};

/// A Wordle-style guessing game, with optional mixed word lengths and blind clues.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains the possible solutions, with one word on each line. A word
    /// may be followed by " : " and an explanation, which is shown at the end of the game.
    #[arg(short = 'f', long)]
    words_file: String,

    /// The word length to start with: 4, 5, 6, or "mixed".
    #[arg(short, long)]
    length: Option<WordLength>,

    /// Start with blind clues, which only say how many letters are right.
    #[arg(short, long)]
    blind: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Play a single game with the given settings.
    Play,
    /// Show the menu, where games can be configured and started. This is the default.
    Menu,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let words_reader = io::BufReader::new(
        File::open(&args.words_file)
            .with_context(|| format!("could not open words file {}", args.words_file))?,
    );
    let mut word_bank = WordBank::from_reader(words_reader)
        .with_context(|| format!("could not load words from {}", args.words_file))?;
    info!("There are {} possible words.", word_bank.len());

    let mut config = GameConfig::new(args.length.unwrap_or_default(), args.blind);
    let mut rng = rand::thread_rng();
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    match args.command.unwrap_or(Command::Menu) {
        Command::Play => run_game(&config, &mut word_bank, &mut rng, &mut input, &mut output),
        Command::Menu => run_menu(
            &mut config,
            &mut word_bank,
            &mut rng,
            &mut input,
            &mut output,
        ),
    }
}

fn run_menu<R: Rng, I: BufRead, O: Write>(
    config: &mut GameConfig,
    word_bank: &mut WordBank,
    rng: &mut R,
    input: &mut I,
    output: &mut O,
) -> anyhow::Result<()> {
    loop {
        writeln!(output, "\n----- WORDLE -----\n")?;
        writeln!(output, "Current game settings:")?;
        writeln!(output, "Word length: {}", config.word_length)?;
        writeln!(
            output,
            "Clue system: {}",
            if config.blind { "blind!" } else { "normal" }
        )?;
        writeln!(output, "Guesses allowed: {}\n", config.max_guesses())?;
        writeln!(output, "What would you like to do?")?;
        writeln!(output, "Enter 1 to start the game!")?;
        writeln!(output, "Enter 2 to configure the game")?;

        match read_choice(input, output, "Enter anything else to exit: ")?.as_str() {
            "1" => {
                if let Err(e) = run_game(config, word_bank, rng, input, output) {
                    if !matches!(e.downcast_ref::<GameError>(), Some(GameError::WordBank(_))) {
                        return Err(e);
                    }
                    writeln!(output, "{e:#}. Restart to reset the word bank.")?;
                }
            }
            "2" => configure(config, input, output)?,
            _ => {
                writeln!(output, "Goodbye!")?;
                return Ok(());
            }
        }
    }
}

fn configure<I: BufRead, O: Write>(
    config: &mut GameConfig,
    input: &mut I,
    output: &mut O,
) -> io::Result<()> {
    writeln!(
        output,
        "\nWord length can be 4 to 6, or mixed! Playing with a mixed length allows guesses of \
         4 to 6 letters, and each clue tells you whether you have the correct length."
    )?;
    writeln!(
        output,
        "The clue system can be blind instead! You will only be told how many letters are in \
         the correct position, and how many are in the word but in the wrong position."
    )?;
    writeln!(
        output,
        "The number of guesses allowed will change accordingly."
    )?;

    loop {
        writeln!(output, "\nWhat would you like to do?")?;
        writeln!(output, "Enter 4, 5, 6, or mixed to change the word length")?;
        writeln!(output, "Enter 1 or 0 to turn blind mode on or off")?;
        let choice = read_choice(input, output, "Enter anything else to go back: ")?;
        match choice.as_str() {
            "1" => {
                config.blind = true;
                writeln!(output, "Clue system is now blind!")?;
            }
            "0" => {
                config.blind = false;
                writeln!(output, "Clue system is now normal!")?;
            }
            _ => match choice.parse::<WordLength>() {
                Ok(word_length) => {
                    config.word_length = word_length;
                    writeln!(output, "Word length changed to {}!", word_length)?;
                }
                Err(_) => return Ok(()),
            },
        }
    }
}

fn run_game<R: Rng, I: BufRead, O: Write>(
    config: &GameConfig,
    word_bank: &mut WordBank,
    rng: &mut R,
    input: &mut I,
    output: &mut O,
) -> anyhow::Result<()> {
    let mut session = GameSession::start(config, word_bank, rng)?;
    play_session(
        &mut session,
        Presenter::from_blind(config.blind),
        input,
        output,
    )?;
    if let Some(explanation) = word_bank.explanation(session.solution()) {
        writeln!(output, "{}: {}", session.solution(), explanation)?;
    }
    Ok(())
}

/// Prompts for a line of input, and returns it trimmed. Returns an empty string at the end of
/// the input.
fn read_choice<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    prompt: &str,
) -> io::Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut buffer = String::new();
    input.read_line(&mut buffer)?;
    Ok(buffer.trim().to_string())
}
