use service::MessageService;

/// Read-only panel over the shared message log.
#[derive(Clone)]
pub struct MessagesView {
    messages: MessageService,
}

impl MessagesView {
    pub fn new(messages: MessageService) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.messages()
    }

    pub fn clear(&self) {
        self.messages.clear();
    }
}
