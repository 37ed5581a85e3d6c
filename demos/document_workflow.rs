//! Document Approval Workflow
//!
//! This example demonstrates a multi-stage approval workflow with undo/redo.
//!
//! Key concepts:
//! - Multi-stage workflow (draft -> review -> approved -> published)
//! - Event rules reject out-of-order actions
//! - Editorial undo/redo over the visited stages
//! - Final state (published is terminal)
//!
//! Run with: RUST_LOG=trace cargo run --example document_workflow

use undoable_fsm::{ConfigBuilder, Fsm, FsmBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Document Approval Workflow ===\n");

    let config = ConfigBuilder::new()
        .initial("draft")
        .transition("draft", "submit", "review")
        .transition("review", "approve", "approved")
        .transition("review", "reject", "draft")
        .transition("approved", "publish", "published")
        .terminal("published")
        .build()?;

    let mut doc = FsmBuilder::new().config(&config).build()?;
    report(&doc);

    println!("\nTrying to publish a draft:");
    if let Err(err) = doc.trigger("publish") {
        println!("  rejected: {}", err);
    }

    for event in ["submit", "approve"] {
        doc.trigger(event)?;
        println!("\n'{}' accepted", event);
        report(&doc);
    }

    println!("\nApproval was premature, undoing it:");
    doc.undo();
    report(&doc);

    println!("\nReviewer rejects instead (redo history is dropped):");
    doc.trigger("reject")?;
    report(&doc);
    println!("  redo available: {}", doc.can_redo());

    println!("\nSecond round:");
    for event in ["submit", "approve", "publish"] {
        doc.trigger(event)?;
    }
    report(&doc);
    println!("  final: {}", doc.is_final());
    println!("  path: {}", doc.path().join(" -> "));

    println!("\n=== Example Complete ===");
    Ok(())
}

fn report(doc: &Fsm<'_>) {
    println!("  state: {}", doc.state());
    println!("  available events: {:?}", doc.events());
}
