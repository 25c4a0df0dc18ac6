//! Integration tests for `Task`.
#![cfg(feature = "async")]

use std::cell::Cell;
use std::time::Duration;

use algebox::control::{Either, Task, try_catch};
use algebox::error::TaskError;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone, PartialEq)]
struct Project {
    id: u32,
    title: String,
}

fn find(id: u32) -> Task<String, Project> {
    Task::new(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        if id == 0 {
            Either::Left(String::from("no project with id 0"))
        } else {
            Either::Right(Project {
                id,
                title: format!("Project {id}"),
            })
        }
    })
}

#[tokio::test]
async fn parallel_report_header() {
    init_tracing();
    let header = Task::of(|first: Project| move |second: Project| {
        format!("Report {} compared to {}", first.title, second.title)
    })
    .ap(find(20))
    .ap(find(10))
    .fork(|error| error, |header| header)
    .await;
    assert_eq!(header, Ok(String::from("Report Project 20 compared to Project 10")));
}

#[tokio::test]
async fn rejection_reaches_the_rejected_callback() {
    init_tracing();
    let result = find(0)
        .map(|project| project.id)
        .fork(|error| Err::<u32, _>(error), Ok)
        .await;
    assert_eq!(result, Ok(Err(String::from("no project with id 0"))));
}

#[tokio::test]
async fn either_inside_task_composes() {
    init_tracing();
    let parsed = Task::<String, _>::of("42")
        .map(|text| try_catch(move || text.parse::<i32>()))
        .fork(|_| 0, |outcome| outcome.fold(|_| -1, |parsed| parsed.unwrap_or(-2)))
        .await;
    assert_eq!(parsed, Ok(42));
}

#[tokio::test]
async fn collects_many_projects() {
    init_tracing();
    let titles = Task::all((1..=3).map(find))
        .map(|projects| projects.into_iter().map(|project| project.title).collect::<Vec<_>>())
        .fork(|_| Vec::new(), |titles| titles)
        .await;
    assert_eq!(
        titles,
        Ok(vec![
            String::from("Project 1"),
            String::from("Project 2"),
            String::from("Project 3"),
        ])
    );
}

#[tokio::test]
async fn cancelled_task_runs_no_callback() {
    init_tracing();
    let task = find(7);
    task.abort();
    let called = Cell::new(false);
    let result = task.fork(|_| called.set(true), |_| called.set(true)).await;
    assert_eq!(result, Err(TaskError::Cancelled));
    assert!(!called.get());
}
