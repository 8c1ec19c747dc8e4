use crate::domain::model::{ChatMessage, ProjectGoal};

pub const SYSTEM_PROMPT: &str = "You are an expert software architect and project planner. \
Your task is to create a detailed project plan for modifying the existing Waku application based on a user's high-level goal. \
The plan should include a markdown checklist of coding tasks (do not include testing or other non coding tasks in the checklist). \
Focus on actionable steps for the implementation team.";

const APP_DESCRIPTION: &str = "We have already existing a sample app that is a webapp that is an anonymous 'confession board' \
where the user visits the website, and the site connects to a Waku peer, and then retrieves whatever messages are at a given topic, \
then displays them. The user can then broadcast messages to that topic. These messages they broadcast are also saved to the Waku Store. \
Other people that visit the website can then see the messages, because these messages are persisted to the Waku Store.";

const CONVERSION_REQUEST: &str = "We want to modify this app based on the user's goal, so we need to make a plan for this. \
The user will ask for a whole different kind of app that makes use of the same decentralized messaging technology of Waku. \
We need to create a plan to convert the confession board app into the app that they are requesting. \
Here is the user's goal for modifying the existing Waku application:";

pub fn user_prompt(goal: &ProjectGoal) -> String {
    format!(
        "{}\n\n{}\n\n{}\n\nPlease generate a detailed project plan.",
        APP_DESCRIPTION, CONVERSION_REQUEST, goal
    )
}

/// System instruction first, then the user's request.
pub fn build_messages(goal: &ProjectGoal) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(user_prompt(goal)),
    ]
}
