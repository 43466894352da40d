//! Plan a trip for the sample traveller and print each stage's output.
//!
//! Needs OPENAI_API_KEY (and optionally OPENAI_BASE_URL / PLANNER_MODEL).

use trip_planner_rs::{AgentState, OpenAIClient, Pipeline, PlannerConfig, UserInput};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::try_init().ok();

    let config = PlannerConfig::from_env()?;
    let client = OpenAIClient::new(&config)?;
    let pipeline = Pipeline::trip_planner(&config);

    let input = UserInput::new(
        "I am an extrovert, I like history and food, I am medium energy, \
         I prefer small groups, and I have a budget of $200",
    );

    println!("=== Singapore Trip Planner ===\n");
    println!("Input: {}\n", input.as_str());

    let run = pipeline.run_traced(&client, AgentState::new(input)).await?;
    println!("{}", run.replay());

    if let Some(plan) = &run.state.final_trip_plan {
        println!("\n--- Trip Plan ---");
        for day in &plan.itinerary {
            println!("{}", day.day);
            for slot in &day.activities {
                println!(
                    "  {:<12} {} ({}, {})",
                    slot.time, slot.activity.name, slot.activity.location, slot.activity.price_range
                );
            }
        }
    }

    if let Some(reason) = &run.state.reason_for_recommendations {
        println!("\nWhy: {}", reason);
    }

    Ok(())
}
