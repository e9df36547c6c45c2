// Command-line driver: pick a built-in task (or load a dataset), describe the
// hidden layers, train, and print the results table.
//
//   cargo run --release -- --task xor --hidden-layers 1 --neurons 2
//   RUST_LOG=debug cargo run --release -- --task full-adder --hidden-layers 2 --neurons 4,4

use anyhow::{bail, Context};
use clap::Parser;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use neuron_web::network::spec::DEFAULT_LEARNING_RATE;
use neuron_web::{
    format_report, parse_hidden_layers, train_loop, Dataset, Network, NetworkSpec, Task,
    TrainConfig,
};

#[derive(Parser, Debug)]
#[command(name = "neuron-web", version, about = "Train a small sigmoid network with online backpropagation")]
struct Cli {
    /// Built-in task: xor, xor-nor or full-adder
    #[arg(long, default_value = "xor")]
    task: Task,

    /// JSON dataset to train on instead of the built-in task
    #[arg(long)]
    dataset: Option<String>,

    /// Number of hidden layers
    #[arg(long, default_value = "1")]
    hidden_layers: String,

    /// Comma-separated neuron count for each hidden layer
    #[arg(long, default_value = "2")]
    neurons: String,

    /// JSON network spec; replaces --hidden-layers, --neurons and --learning-rate
    #[arg(long)]
    spec: Option<String>,

    #[arg(long, default_value_t = 50_000)]
    epochs: usize,

    #[arg(long, default_value_t = DEFAULT_LEARNING_RATE)]
    learning_rate: f64,

    /// Seed for weight initialization; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Log the mean error every this many epochs (at debug level)
    #[arg(long, default_value_t = 1000)]
    log_every: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let dataset = match &cli.dataset {
        Some(path) => Dataset::load_json(path)
            .with_context(|| format!("failed to load dataset {path}"))?,
        None => cli.task.dataset(),
    };
    let (Some(inputs), Some(outputs)) = (dataset.input_width(), dataset.target_width()) else {
        bail!("dataset has no examples");
    };

    let spec = match &cli.spec {
        Some(path) => NetworkSpec::load_json(path)
            .with_context(|| format!("failed to load network spec {path}"))?,
        None => {
            let hidden = parse_hidden_layers(&cli.hidden_layers, &cli.neurons)?;
            NetworkSpec::from_hidden(inputs, &hidden, outputs).with_learning_rate(cli.learning_rate)
        }
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut network = Network::with_rng(&spec, &mut rng)?;
    info!(
        "network {:?}: {} nodes, {} edges",
        network.layer_sizes(),
        network.node_count(),
        network.edge_count()
    );

    let config = TrainConfig::new(cli.epochs).with_log_every(cli.log_every);
    train_loop(&mut network, dataset.examples(), &config)?;

    print!("{}", format_report(&network, &dataset)?);
    Ok(())
}
