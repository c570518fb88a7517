//! Then steps for to-do lifecycle BDD scenarios.

use super::world::ToDoWorld;
use rstest_bdd_macros::then;
use todo_keeper::todo::services::ToDoManagerError;

fn incoming_contains(world: &ToDoWorld, title: &str) -> Result<bool, eyre::Report> {
    let id = world.id_for(title)?;
    Ok(world.last_incoming.iter().any(|item| item.id() == id))
}

#[then(r#"the incoming items include "{title}""#)]
fn incoming_includes(world: &ToDoWorld, title: String) -> Result<(), eyre::Report> {
    eyre::ensure!(
        incoming_contains(world, &title)?,
        "expected {title:?} among incoming items"
    );
    Ok(())
}

#[then(r#"the incoming items do not include "{title}""#)]
fn incoming_excludes(world: &ToDoWorld, title: String) -> Result<(), eyre::Report> {
    eyre::ensure!(
        !incoming_contains(world, &title)?,
        "expected {title:?} to be absent from incoming items"
    );
    Ok(())
}

#[then("the operation fails with a not found error")]
fn fails_with_not_found(world: &ToDoWorld) -> Result<(), eyre::Report> {
    match world.last_error.as_ref() {
        Some(ToDoManagerError::NotFound(_)) => Ok(()),
        other => Err(eyre::eyre!("expected NotFound error, got {other:?}")),
    }
}

#[then("the operation fails with a validation error")]
fn fails_with_validation(world: &ToDoWorld) -> Result<(), eyre::Report> {
    match world.last_error.as_ref() {
        Some(ToDoManagerError::Validation(_)) => Ok(()),
        other => Err(eyre::eyre!("expected Validation error, got {other:?}")),
    }
}
