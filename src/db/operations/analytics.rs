//! Read-only folds over a user's task set. No hierarchy awareness beyond
//! grouping by group id.

use crate::db::internal;
use crate::db::model::Task;
use crate::db::operations::models::MonthlyTrends;
use crate::db::operations::models::PeakHours;
use crate::db::operations::models::TaskAnalytics;
use crate::db::types::TaskStatus;
use crate::db::Pool;
use chrono::Datelike;
use chrono::Timelike;
use failure::Error;
use std::collections::HashMap;
use uuid::Uuid;

pub fn user_analysis(pool: &Pool, user_uuid: &Uuid) -> Result<TaskAnalytics, Error> {
    let connection = pool.get()?;
    let tasks = internal::task::all_tasks_for_user(&connection, user_uuid)?;
    Ok(collective_stats(&tasks))
}

pub fn productivity_trends(pool: &Pool, user_uuid: &Uuid) -> Result<MonthlyTrends, Error> {
    let connection = pool.get()?;
    let tasks = internal::task::all_tasks_for_user(&connection, user_uuid)?;
    Ok(monthly_trends(&tasks))
}

pub fn peak_hours(pool: &Pool, user_uuid: &Uuid) -> Result<PeakHours, Error> {
    let connection = pool.get()?;
    let tasks = internal::task::all_tasks_for_user(&connection, user_uuid)?;
    Ok(hourly_peaks(&tasks))
}

fn completed(tasks: &[Task]) -> impl Iterator<Item = &Task> {
    tasks.iter().filter(|t| t.status == TaskStatus::Completed)
}

/// On time means the closing update happened no later than the deadline.
/// Average completion time is hours between creation and the closing
/// update, over completed tasks only.
pub fn collective_stats(tasks: &[Task]) -> TaskAnalytics {
    let completed_tasks: Vec<&Task> = completed(tasks).collect();
    let on_time_tasks = completed_tasks
        .iter()
        .filter(|t| t.updated <= t.deadline)
        .count();
    let avg_completion_time = if completed_tasks.is_empty() {
        0.0
    } else {
        let total_hours: f64 = completed_tasks
            .iter()
            .map(|t| (t.updated - t.created).num_seconds() as f64 / 3600.0)
            .sum();
        total_hours / completed_tasks.len() as f64
    };
    TaskAnalytics {
        total_tasks: tasks.len(),
        completed_tasks: completed_tasks.len(),
        on_time_tasks,
        delayed_tasks: completed_tasks.len() - on_time_tasks,
        avg_completion_time,
    }
}

/// Completed-task counts per calendar month (index 0 = January),
/// collectively and per group.
pub fn monthly_trends(tasks: &[Task]) -> MonthlyTrends {
    let mut collective = vec![0i64; 12];
    let mut per_group: HashMap<i32, Vec<i64>> = HashMap::new();
    for task in completed(tasks) {
        let month = task.updated.month0() as usize;
        collective[month] += 1;
        per_group.entry(task.group_id).or_insert_with(|| vec![0; 12])[month] += 1;
    }
    MonthlyTrends {
        collective,
        per_group,
    }
}

/// Completed-task counts per hour of day (0-23), collectively and per
/// group.
pub fn hourly_peaks(tasks: &[Task]) -> PeakHours {
    let mut collective = vec![0i64; 24];
    let mut per_group: HashMap<i32, Vec<i64>> = HashMap::new();
    for task in completed(tasks) {
        let hour = task.updated.hour() as usize;
        collective[hour] += 1;
        per_group.entry(task.group_id).or_insert_with(|| vec![0; 24])[hour] += 1;
    }
    PeakHours {
        collective,
        per_group,
    }
}
