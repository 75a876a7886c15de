use crate::domain::ticket::WorkItem;

pub const NO_BLOCKERS: &str = "None";

#[derive(Debug, Clone)]
pub struct StandupMessage {
    pub done: Vec<WorkItem>,
    pub plans: String,
    pub blockers: String,
}

impl StandupMessage {
    pub fn new(done: Vec<WorkItem>, plans: &str, blockers: &str) -> Self {
        let blockers = blockers.trim();
        Self {
            done,
            plans: plans.trim().to_string(),
            blockers: if blockers.is_empty() {
                NO_BLOCKERS.to_string()
            } else {
                blockers.to_string()
            },
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("1. What did you do yesterday?\n");
        for item in &self.done {
            out.push_str("- ");
            out.push_str(&item.label);
            out.push('\n');
        }
        out.push_str("\n2. What will you do today?\n");
        out.push_str(&self.plans);
        out.push_str("\n\n3. Any blockers?\n");
        out.push_str(&self.blockers);
        out.push('\n');
        out
    }
}

pub fn assemble(done: Vec<WorkItem>, plans: &str, blockers: &str) -> String {
    StandupMessage::new(done, plans, blockers).render()
}
