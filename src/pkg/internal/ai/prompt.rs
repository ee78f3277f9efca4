use crate::conf::PromptTemplate;

/// Retrieved passages are separated by a blank line.
pub fn join_context(passages: &[String]) -> String {
    passages.join("\n\n")
}

impl PromptTemplate {
    pub fn render(&self, context: &str, question: &str) -> String {
        match self {
            PromptTemplate::Dutch => format!(
                "Gebruik de volgende context om de vraag te beantwoorden.\n\n\
                 Context:\n{context}\n\n\
                 Vraag:\n{question}\n\n\
                 Antwoord:\n"
            ),
            PromptTemplate::English => format!(
                "Use the following context to answer the question.\n\n\
                 Context:\n{context}\n\n\
                 Question:\n{question}\n\n\
                 Answer:\n"
            ),
        }
    }
}
