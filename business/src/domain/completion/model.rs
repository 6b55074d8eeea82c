/// Author of a chat message.
#[derive(Debug, Clone, PartialEq)]
pub enum Role {
    System,
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PromptMessage {
    pub role: Role,
    pub content: String,
}

/// Material read from disk that is appended to the question.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub name: String,
    pub contents: String,
}

/// A one-shot example: what was asked and how it should be answered.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub prompt: String,
    pub response: String,
}

/// Ordered chat messages sent as a single completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub messages: Vec<PromptMessage>,
}

impl Prompt {
    /// Builds the prompt for a question.
    ///
    /// An example becomes a user/assistant exchange ahead of the question, and
    /// an attachment is appended to the final user message under a header that
    /// names it.
    pub fn compose(
        question: &str,
        example: Option<&Example>,
        attachment: Option<&Attachment>,
    ) -> Self {
        let mut messages = Vec::new();

        if let Some(example) = example {
            messages.push(PromptMessage {
                role: Role::User,
                content: example.prompt.clone(),
            });
            messages.push(PromptMessage {
                role: Role::Assistant,
                content: example.response.clone(),
            });
        }

        let content = match attachment {
            Some(attachment) => format!(
                "{}\n\n--- {} ---\n{}",
                question, attachment.name, attachment.contents
            ),
            None => question.to_string(),
        };
        messages.push(PromptMessage {
            role: Role::User,
            content,
        });

        Self { messages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_hold_single_user_message_for_plain_question() {
        let prompt = Prompt::compose("What is Rust?", None, None);

        assert_eq!(
            prompt.messages,
            vec![PromptMessage {
                role: Role::User,
                content: "What is Rust?".to_string(),
            }]
        );
    }

    #[test]
    fn should_place_example_exchange_before_question() {
        let example = Example {
            prompt: "Summarize: a b c".to_string(),
            response: "abc".to_string(),
        };

        let prompt = Prompt::compose("Summarize: d e f", Some(&example), None);

        let roles: Vec<Role> = prompt.messages.iter().map(|m| m.role.clone()).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User]);
        assert_eq!(prompt.messages[1].content, "abc");
        assert_eq!(prompt.messages[2].content, "Summarize: d e f");
    }

    #[test]
    fn should_append_attachment_to_question() {
        let attachment = Attachment {
            name: "main.go".to_string(),
            contents: "package main".to_string(),
        };

        let prompt = Prompt::compose("Review this", None, Some(&attachment));

        assert_eq!(prompt.messages.len(), 1);
        assert_eq!(
            prompt.messages[0].content,
            "Review this\n\n--- main.go ---\npackage main"
        );
    }
}
