//! Given steps for to-do lifecycle BDD scenarios.

use super::world::{ToDoWorld, run_async};
use crate::todo_helpers::reference_now;
use chrono::TimeDelta;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use todo_keeper::todo::services::ToDoRequest;

fn create_expiring_after(
    world: &mut ToDoWorld,
    title: String,
    delta: TimeDelta,
) -> Result<(), eyre::Report> {
    let request = ToDoRequest::new(title.clone(), "Scenario item", reference_now() + delta);
    let id = run_async(world.manager.create(request)).wrap_err("create scenario item")?;
    world.ids_by_title.insert(title, id);
    Ok(())
}

#[given(r#"a to-do item "{title}" expiring in {hours:i64} hours"#)]
fn item_expiring_in_hours(
    world: &mut ToDoWorld,
    title: String,
    hours: i64,
) -> Result<(), eyre::Report> {
    create_expiring_after(world, title, TimeDelta::hours(hours))
}

#[given(r#"a to-do item "{title}" expiring in {days:i64} days"#)]
fn item_expiring_in_days(
    world: &mut ToDoWorld,
    title: String,
    days: i64,
) -> Result<(), eyre::Report> {
    create_expiring_after(world, title, TimeDelta::days(days))
}
