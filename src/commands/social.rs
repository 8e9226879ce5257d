//! `warren social` command - populate and query a random social network

use crate::cli::Cli;
use warren_core::config::Config;
use warren_core::error::Result;
use warren_core::format::OutputFormat;
use warren_core::social::{SocialNetwork, UserId};

/// Execute the social command
pub fn execute(
    cli: &Cli,
    config: &Config,
    users: Option<usize>,
    avg_friendships: Option<usize>,
    seed: u64,
    from: Option<UserId>,
) -> Result<()> {
    let num_users = users.unwrap_or(config.social.users);
    let avg = avg_friendships.unwrap_or(config.social.avg_friendships);

    let network = SocialNetwork::populate(num_users, avg, seed)?;

    match cli.format {
        OutputFormat::Json => output_json(&network, from)?,
        OutputFormat::Human => output_human(cli, &network, from)?,
    }
    Ok(())
}

fn output_human(cli: &Cli, network: &SocialNetwork, from: Option<UserId>) -> Result<()> {
    println!(
        "{} users, {} friendships",
        network.user_count(),
        network.friendship_count()
    );
    for (id, _) in network.users() {
        let friends: Vec<String> = network.friends(id)?.iter().map(u32::to_string).collect();
        println!("{}: {}", id, friends.join(", "));
    }

    let Some(user) = from else {
        return Ok(());
    };

    let paths = network.shortest_paths(user)?;
    println!();
    println!("shortest paths from {}:", user);
    for (dest, path) in &paths {
        let chain: Vec<String> = path.iter().map(u32::to_string).collect();
        println!("{}: {}", dest, chain.join(" -> "));
    }

    if !cli.quiet {
        let summary = network.summary(user)?;
        println!(
            "reached {} of {} users ({:.0}%), mean separation {:.2}",
            summary.reachable, summary.others, summary.percent_reached, summary.mean_separation
        );
    }
    Ok(())
}

fn output_json(network: &SocialNetwork, from: Option<UserId>) -> Result<()> {
    let mut friendships = serde_json::Map::new();
    for (id, _) in network.users() {
        let friends: Vec<UserId> = network.friends(id)?.iter().copied().collect();
        friendships.insert(id.to_string(), serde_json::json!(friends));
    }

    let mut out = serde_json::json!({
        "users": network.user_count(),
        "friendship_count": network.friendship_count(),
        "friendships": friendships,
    });

    if let Some(user) = from {
        let paths = network.shortest_paths(user)?;
        let summary = network.summary(user)?;
        out["paths"] = serde_json::to_value(&paths)?;
        out["summary"] = serde_json::to_value(&summary)?;
    }

    println!("{}", out);
    Ok(())
}
