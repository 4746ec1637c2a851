use crate::models::Task;

pub const EARN_TASKS: &[Task] = &[
    Task { label: "Workout", coins: 15 },
    Task { label: "5 min edit", coins: 3 },
    Task { label: "1 hour edit", coins: 20 },
    Task { label: "Cleaning the house", coins: 2 },
    Task { label: "24h fasting", coins: 20 },
    Task { label: "Complete to-do list", coins: 10 },
];

pub const SPEND_TASKS: &[Task] = &[
    Task { label: "Watch TV (1h)", coins: -20 },
    Task { label: "Eating out", coins: -15 },
    Task { label: "Delivery food", coins: -25 },
    Task { label: "Ice cream / snack", coins: -10 },
    Task { label: "Baseball", coins: -30 },
    Task { label: "늦잠", coins: -25 },
];

pub fn find_task(label: &str) -> Option<Task> {
    EARN_TASKS
        .iter()
        .chain(SPEND_TASKS)
        .find(|task| task.label == label)
        .copied()
}
