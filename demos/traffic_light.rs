//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic transitions driven by a single event
//! - Declarative configuration with the `fsm_config!` macro
//! - Stepping back and forth through visited states
//!
//! Run with: RUST_LOG=debug cargo run --example traffic_light

use undoable_fsm::{fsm_config, Fsm, FsmError};

fn main() -> Result<(), FsmError> {
    env_logger::init();

    println!("=== Traffic Light State Machine ===\n");

    let config = fsm_config! {
        initial: "red",
        states: {
            "red" => { "tick" => "green" },
            "green" => { "tick" => "yellow" },
            "yellow" => { "tick" => "red" },
        }
    };

    let mut light = Fsm::new(&config);
    println!("Initial state: {}\n", light.state());

    println!("Transition sequence:");
    for _ in 0..4 {
        let from = light.state().to_string();
        light.trigger("tick")?;
        println!("  {} -> {}", from, light.state());
    }

    println!("\nVisited: {}", light.path().join(" -> "));

    println!("\nStepping back twice:");
    light.undo();
    light.undo();
    println!("  now at {}", light.state());

    println!("Stepping forward once:");
    light.redo();
    println!("  now at {}", light.state());

    println!("\nStates reacting to 'tick': {:?}", light.states(Some("tick")));

    println!("\n=== Example Complete ===");
    Ok(())
}
