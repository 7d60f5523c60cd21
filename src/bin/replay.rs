use tictactoe::replay;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <index> [<index> ...]", args[0]);
        std::process::exit(1);
    }
    let moves = args[1..]
        .iter()
        .map(|a| a.parse::<usize>())
        .collect::<Result<Vec<_>, _>>()?;

    let report = replay(&moves);
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
