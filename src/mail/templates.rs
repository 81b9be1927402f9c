use crate::db::types::TaskPriority;
use crate::mail::Message;
use chrono::NaiveDateTime;

fn task_assigned(
    task_id: i32,
    task_name: &str,
    deadline: &NaiveDateTime,
    priority: TaskPriority,
    domain: &str,
) -> Message {
    let formatted_deadline = deadline.format("%A, %d %B %Y, %I:%M %p");
    Message {
        subject: "New Task Assigned".to_owned(),
        body: format!(
            "\
<div style=\"font-family: Arial, sans-serif; max-width: 600px; margin: auto; padding: 20px;\">
    <h2 style=\"text-align: center;\">New Task Assigned</h2>
    <p>A new task has been assigned to you. Below are the details:</p>
    <table style=\"width: 100%; border-collapse: collapse; margin-top: 10px;\">
        <tr><td style=\"font-weight: bold;\">Task Name:</td><td>{task_name}</td></tr>
        <tr><td style=\"font-weight: bold;\">Deadline:</td><td>{deadline}</td></tr>
        <tr><td style=\"font-weight: bold;\">Priority:</td><td>{priority}</td></tr>
    </table>
    <p style=\"margin-top: 20px; text-align: center;\">
        <a href=\"{domain}/tasks/{task_id}\">View Task</a>
    </p>
    <p style=\"font-size: 14px; text-align: center; margin-top: 20px;\">
        This is an automated email. Please do not reply.
    </p>
</div>",
            task_name = task_name,
            deadline = formatted_deadline,
            priority = priority,
            domain = domain,
            task_id = task_id
        ),
    }
}

#[derive(Clone)]
pub struct TemplateManager {
    domain: String,
}

impl TemplateManager {
    pub fn new(domain: String) -> Self {
        TemplateManager { domain }
    }

    pub fn render(&self, t: &Template) -> Message {
        match t {
            Template::TaskAssigned {
                task_id,
                task_name,
                deadline,
                priority,
            } => task_assigned(*task_id, task_name, deadline, *priority, &self.domain),
        }
    }
}

pub enum Template {
    TaskAssigned {
        task_id: i32,
        task_name: String,
        deadline: NaiveDateTime,
        priority: TaskPriority,
    },
}
