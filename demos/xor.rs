use neuron_web::{train_loop, Network, NetworkSpec, Task, TrainConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let mut network = Network::new(&NetworkSpec::new(vec![2, 2, 1]).with_learning_rate(0.1))?;
    let data = Task::Xor.dataset();

    let config = TrainConfig::new(50_000).with_log_every(5_000);
    let loss = train_loop(&mut network, data.examples(), &config)?;
    println!("final mean error = {loss:.6}");

    for example in data.examples() {
        let output = network.predict(&example.inputs)?;
        println!("Input: {:?} -> Output: {:.4}", example.inputs, output[0]);
    }
    Ok(())
}
