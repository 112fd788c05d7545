use yew::prelude::*;
use web_sys::HtmlInputElement;
use chrono::{DateTime, Utc};
use shared::{AttachmentKind, Message, OutgoingMessage};

/// Time of day shown under each message, e.g. "14:05"
fn format_message_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%H:%M").to_string()
}

/// Draft to emit on submit, or None when the draft is blank
fn outgoing_from_draft(draft: &str) -> Option<OutgoingMessage> {
    let content = draft.trim();
    if content.is_empty() {
        None
    } else {
        Some(OutgoingMessage::text(content))
    }
}

#[derive(Properties, PartialEq)]
pub struct ChatInterfaceProps {
    pub messages: Vec<Message>,
    pub assistant_name: String,
    pub on_send_message: Callback<OutgoingMessage>,
}

#[function_component(ChatInterface)]
pub fn chat_interface(props: &ChatInterfaceProps) -> Html {
    let draft = use_state(String::new);

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let on_send = props.on_send_message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(outgoing) = outgoing_from_draft(&draft) {
                on_send.emit(outgoing);
                draft.set(String::new());
            }
        })
    };

    html! {
        <section class="chat card">
            <h3>{format!("Chat with {}", props.assistant_name)}</h3>

            <div class="chat-messages">
                {for props.messages.iter().map(|message| {
                    let author = if message.is_from_user() { "You" } else { props.assistant_name.as_str() };
                    html! {
                        <div
                            key={message.id.clone()}
                            class={classes!("chat-message", if message.is_from_user() { "from-user" } else { "from-assistant" })}
                        >
                            <span class="chat-author">{author}</span>
                            <p class="chat-content">{&message.content}</p>
                            {for message.attachments.iter().map(|attachment| match attachment.kind {
                                AttachmentKind::Image => html! {
                                    <img class="chat-attachment" src={attachment.url.clone()} alt={attachment.name.clone()} />
                                },
                                AttachmentKind::File => html! {
                                    <a class="chat-attachment" href={attachment.url.clone()}>{format!("📎 {}", attachment.name)}</a>
                                },
                            })}
                            <span class="chat-time">{format_message_time(&message.timestamp)}</span>
                        </div>
                    }
                })}
            </div>

            <form class="chat-form" onsubmit={on_submit}>
                <input
                    type="text"
                    placeholder="Tell me about your child's interests..."
                    value={(*draft).clone()}
                    oninput={on_input}
                />
                <button type="submit" class="btn btn-primary" disabled={draft.trim().is_empty()}>
                    {"Send"}
                </button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_message_time() {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 14, 5, 59).unwrap();
        assert_eq!(format_message_time(&at), "14:05");
    }

    #[test]
    fn test_blank_draft_is_not_sent() {
        assert_eq!(outgoing_from_draft(""), None);
        assert_eq!(outgoing_from_draft("  \n\t"), None);
    }

    #[test]
    fn test_draft_is_trimmed() {
        assert_eq!(outgoing_from_draft("  Hello "), Some(OutgoingMessage::text("Hello")));
    }
}
