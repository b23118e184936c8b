

/// Knowledge text loaded into the corpus when no `knowledge_path` is configured.
pub const DEFAULT_KNOWLEDGE: &str = "
Hello! I'm your AI assistant. I can answer your questions.
What is your name?
My name is PyBot.
How can I help you?
I can help you with basic information.
Tell me about Python.
Python is a high-level, interpreted programming language.
Who developed Python?
Python was developed by Guido van Rossum.
What is machine learning?
Machine learning is a field of artificial intelligence that uses statistical techniques.
Bye
Goodbye! Have a nice day.
";
