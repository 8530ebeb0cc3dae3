use std::io;

use snake_engine::record::{generate_record_filename, load_record, save_record};
use snake_engine::{EdgeWalls, GameConfig, GameSession, MapDefinition, Point, RecordLog, RecordPlayer, Validate, log};

use crate::leaderboard::LeaderboardEntry;
use crate::prompts;
use crate::screen::{self, GameScreen, KeyInput, ScreenMode, TerminalGuard};
use crate::storage::Storage;

pub fn run(storage: &Storage) -> io::Result<()> {
    loop {
        println!();
        println!("Snake");
        println!("-----");
        println!("g: start game");
        println!("i: create configuration");
        println!("u: load configuration");
        println!("n: create map");
        println!("m: load map");
        println!("r: replay a record");
        println!("l: show leaderboard");
        println!("q: quit");

        let choice = prompts::read_line("Enter your choice: ")?;
        match choice.as_str() {
            "g" => start_game(storage)?,
            "i" => create_config(storage)?,
            "u" => load_config(storage)?,
            "n" => create_map(storage)?,
            "m" => load_map(storage)?,
            "r" => replay(storage)?,
            "l" => show_leaderboard(storage)?,
            "q" => {
                println!("Goodbye!");
                return Ok(());
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn start_game(storage: &Storage) -> io::Result<()> {
    let (config_path, config) = match storage.active_config() {
        Ok(loaded) => loaded,
        Err(e) => {
            println!("Failed to load configuration: {}", e);
            return Ok(());
        }
    };
    let (map_path, map) = match storage.active_map() {
        Ok(loaded) => loaded,
        Err(e) => {
            println!("Failed to load map: {}", e);
            return Ok(());
        }
    };

    let config_path_text = config_path.display().to_string();
    let map_path_text = map_path.display().to_string();

    let mut session = match GameSession::new(&config, &map, &config_path_text, &map_path_text) {
        Ok(session) => session,
        Err(e) => {
            println!("Could not start the game: {}", e);
            return Ok(());
        }
    };

    log!("starting game with {} and {}", config_path_text, map_path_text);

    let outcome = {
        let _guard = TerminalGuard::new()?;
        let mut input = KeyInput::new();
        let mut view = GameScreen::new(
            ScreenMode::Live,
            config_path_text.clone(),
            map_path_text.clone(),
        );
        let outcome = session.run(&mut input, &mut view);
        if outcome.is_ok() {
            screen::wait_any_key()?;
        }
        outcome
    };

    if let Err(e) = outcome {
        println!("The game was aborted: {}", e);
        log!("game aborted: {}", e);
        return Ok(());
    }

    let score = session.state().score();
    println!("Game over! Your score is {}.", score);
    post_game(storage, session.finalize(), score)
}

fn post_game(storage: &Storage, record: RecordLog, score: u32) -> io::Result<()> {
    let mut record_saved = false;
    let mut leaderboard_updated = false;

    loop {
        let choice = prompts::read_line(
            "Enter b to save the record, l to update the leaderboard, anything else to return: ",
        )?;
        match choice.as_str() {
            "b" if record_saved => println!("The record is already saved."),
            "b" => record_saved = save_record_flow(storage, &record)?,
            "l" if leaderboard_updated => println!("The leaderboard is already updated."),
            "l" => leaderboard_updated = update_leaderboard_flow(storage, score, &record)?,
            _ => return Ok(()),
        }
    }
}

fn save_record_flow(storage: &Storage, record: &RecordLog) -> io::Result<bool> {
    let name =
        prompts::read_line("Record name (blank for a generated name, q to cancel): ")?;
    if name == "q" {
        return Ok(false);
    }

    let path = if name.is_empty() {
        storage.record_dir().join(generate_record_filename())
    } else {
        storage.record_path(&name)
    };

    if path.exists() {
        println!("Record file already exists.");
        return Ok(false);
    }

    match save_record(&path, record) {
        Ok(()) => {
            println!("Record saved to {}.", path.display());
            log!("record saved to {}", path.display());
            Ok(true)
        }
        Err(e) => {
            println!("Failed to save the record: {}", e);
            Ok(false)
        }
    }
}

fn update_leaderboard_flow(storage: &Storage, score: u32, record: &RecordLog) -> io::Result<bool> {
    let name = prompts::read_line("Enter your name (q to cancel): ")?;
    if name == "q" || name.is_empty() {
        return Ok(false);
    }

    let store = storage.leaderboard_store();
    let mut board = match store.load() {
        Ok(board) => board,
        Err(e) => {
            println!("Failed to load the leaderboard: {}", e);
            return Ok(false);
        }
    };

    board.add(LeaderboardEntry::now(
        name,
        score,
        record.config_path.clone(),
        record.map_path.clone(),
    ));

    match store.save(&board) {
        Ok(()) => {
            println!("Leaderboard updated.");
            Ok(true)
        }
        Err(e) => {
            println!("Failed to save the leaderboard: {}", e);
            Ok(false)
        }
    }
}

fn create_config(storage: &Storage) -> io::Result<()> {
    let name = prompts::read_line("Configuration name (q to cancel): ")?;
    if name == "q" || name.is_empty() {
        return Ok(());
    }

    let store = storage.config_store(&name);
    if store.exists() {
        println!("Configuration file already exists.");
        return Ok(());
    }

    let difficulty = prompts::read_in_range("Game difficulty (1-10): ", 1u32, 10)?;
    let random_seed = prompts::read_parsed("Random seed (-1 for current time): ")?;
    let food_count = prompts::read_in_range("Number of food items (1-5): ", 1usize, 5)?;

    let config = loop {
        let p1 = prompts::read_in_range("Probability of 1-point food (0-1): ", 0.0, 1.0)?;
        let p2 = prompts::read_in_range("Probability of 2-point food (0-1): ", 0.0, 1.0)?;
        let p3 = prompts::read_in_range("Probability of 3-point food (0-1): ", 0.0, 1.0)?;

        let candidate = GameConfig {
            difficulty,
            random_seed,
            food_count,
            food_probabilities: [p1, p2, p3],
        };
        match candidate.validate() {
            Ok(()) => break candidate,
            Err(e) => println!("{}. Please enter the probabilities again.", e),
        }
    };

    match store.save(&config) {
        Ok(()) => println!("Configuration created."),
        Err(e) => println!("Failed to create the configuration: {}", e),
    }
    Ok(())
}

fn load_config(storage: &Storage) -> io::Result<()> {
    if let Some(current) = storage.last_config().get() {
        println!("The current configuration is {}.", current.display());
    }

    let name = prompts::read_line("Configuration to load (q to cancel): ")?;
    if name == "q" || name.is_empty() {
        return Ok(());
    }

    let store = storage.config_store(&name);
    if !store.exists() {
        println!("Failed to load configuration file.");
        return Ok(());
    }

    match store.load() {
        Ok(_) => {
            if let Err(e) = storage.last_config().set(store.path()) {
                println!("Failed to remember the configuration: {}", e);
            } else {
                println!("Configuration loaded.");
            }
        }
        Err(e) => println!("Failed to load configuration: {}", e),
    }
    Ok(())
}

fn create_map(storage: &Storage) -> io::Result<()> {
    let name = prompts::read_line("Map name (q to cancel): ")?;
    if name == "q" || name.is_empty() {
        return Ok(());
    }

    let store = storage.map_store(&name);
    if store.exists() {
        println!("Map file already exists.");
        return Ok(());
    }

    let width = prompts::read_in_range("Map width (8-20): ", 8usize, 20)?;
    let height = prompts::read_in_range("Map height (8-20): ", 8usize, 20)?;
    let walls = EdgeWalls {
        up: prompts::read_bool("Solid top edge? (y/n): ")?,
        down: prompts::read_bool("Solid bottom edge? (y/n): ")?,
        left: prompts::read_bool("Solid left edge? (y/n): ")?,
        right: prompts::read_bool("Solid right edge? (y/n): ")?,
    };

    let mut map = MapDefinition {
        width,
        height,
        walls,
        obstacles: Vec::new(),
    };

    loop {
        let line = prompts::read_line("Add an obstacle as \"x y\" (blank to finish): ")?;
        if line.is_empty() {
            break;
        }

        let mut parts = line.split_whitespace();
        let coords = (
            parts.next().and_then(|s| s.parse::<usize>().ok()),
            parts.next().and_then(|s| s.parse::<usize>().ok()),
        );
        let (Some(x), Some(y)) = coords else {
            println!("Please enter two numbers, e.g. \"4 7\".");
            continue;
        };

        map.obstacles.push(Point::new(x, y));
        if let Err(e) = map.validate() {
            println!("{}.", e);
            map.obstacles.pop();
        }
    }

    match store.save(&map) {
        Ok(()) => println!("Map created."),
        Err(e) => println!("Failed to create the map: {}", e),
    }
    Ok(())
}

fn load_map(storage: &Storage) -> io::Result<()> {
    if let Some(current) = storage.last_map().get() {
        println!("The current map is {}.", current.display());
    }

    let name = prompts::read_line("Map to load (q to cancel): ")?;
    if name == "q" || name.is_empty() {
        return Ok(());
    }

    let store = storage.map_store(&name);
    if !store.exists() {
        println!("Failed to load map file.");
        return Ok(());
    }

    match store.load() {
        Ok(_) => {
            if let Err(e) = storage.last_map().set(store.path()) {
                println!("Failed to remember the map: {}", e);
            } else {
                println!("Map loaded.");
            }
        }
        Err(e) => println!("Failed to load map: {}", e),
    }
    Ok(())
}

fn replay(storage: &Storage) -> io::Result<()> {
    let name = prompts::read_line("Record to replay (q to cancel): ")?;
    if name == "q" || name.is_empty() {
        return Ok(());
    }

    let path = storage.record_path(&name);
    let record = match load_record(&path) {
        Ok(record) => record,
        Err(e) => {
            println!("Cannot replay {}: {}", path.display(), e);
            log!("replay of {} failed: {}", path.display(), e);
            return Ok(());
        }
    };

    let mut player = RecordPlayer::new(record);
    let config_path = player.config_path().to_string();
    let map_path = player.map_path().to_string();

    let _guard = TerminalGuard::new()?;
    let mut view = GameScreen::new(ScreenMode::Replay, config_path, map_path);
    screen::play_record(&mut player, &mut view)?;
    Ok(())
}

fn show_leaderboard(storage: &Storage) -> io::Result<()> {
    let store = storage.leaderboard_store();
    let mut board = match store.load() {
        Ok(board) => board,
        Err(e) => {
            println!("Failed to load the leaderboard: {}", e);
            return Ok(());
        }
    };
    board.sort();

    println!(
        "{:<5}{:<20}{:<10}{:<15}{:<10}{:<30}{:<30}",
        "Rank", "Name", "Score", "Date", "Time", "Configuration", "Map"
    );
    for (rank, entry) in board.entries.iter().enumerate() {
        println!(
            "{:<5}{:<20}{:<10}{:<15}{:<10}{:<30}{:<30}",
            rank + 1,
            entry.name,
            entry.score,
            entry.date,
            entry.time,
            entry.config_path,
            entry.map_path
        );
    }
    Ok(())
}
