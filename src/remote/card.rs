use serde_json::{Value, json};

use crate::{model::submission::LeaveSubmission, utils::date_utils::format_human_readable};

/// Adaptive card announcing a leave request to the team channel.
pub fn adaptive_card(submission: &LeaveSubmission) -> Value {
    let start = format_human_readable(submission.leave_start_date);
    let end = format_human_readable(submission.leave_end_date);
    let duration = if submission.is_single_day() {
        start.clone()
    } else {
        format!("{start} - {end}")
    };

    json!({
        "$schema": "http://adaptivecards.io/schemas/adaptive-card.json",
        "type": "AdaptiveCard",
        "version": "1.4",
        "body": [
            {
                "type": "TextBlock",
                "text": format!("Leave on {start}"),
                "weight": "bolder",
                "size": "large",
                "spacing": "medium"
            },
            {
                "type": "Container",
                "items": [
                    {
                        "type": "TextBlock",
                        "text": submission.name.trim(),
                        "weight": "bolder",
                        "size": "medium"
                    },
                    {
                        "type": "FactSet",
                        "facts": [
                            { "title": "Department:", "value": submission.effective_department() },
                            { "title": "Role:", "value": submission.role.trim() },
                            { "title": "Duration:", "value": duration },
                            { "title": "Type:", "value": submission.effective_leave_type() },
                            { "title": "Category:", "value": submission.effective_category() }
                        ]
                    },
                    {
                        "type": "TextBlock",
                        "text": "Reason:",
                        "weight": "bolder",
                        "spacing": "medium"
                    },
                    {
                        "type": "TextBlock",
                        "text": submission.reason_for_leave.trim(),
                        "wrap": true
                    }
                ],
                "spacing": "medium",
                "style": "emphasis",
                "bleed": false
            }
        ],
        "actions": []
    })
}
