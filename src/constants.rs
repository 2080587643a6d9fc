/// Browser-like user agent sent with the page request; some sites serve
/// stripped-down or blocked responses to unknown clients.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/117.0.0.0 Safari/537.36";

/// Title used when the page has no `<title>` element.
pub const NO_TITLE_SENTINEL: &str = "No title found";

/// Elements whose subtrees are dropped before text extraction.
pub const NOISE_TAGS: &[&str] = &[
    "script", "style", "img", "input", "textarea", "button", "label",
];

pub const SYSTEM_PROMPT: &str = "You are an assistant that analyzes the contents of a website \
and provides a short summary, ignoring text that might be navigation related. \
Respond in markdown.";

pub const USER_PROMPT_INSTRUCTION: &str = "\nThe contents of this website are as follows; \
please provide a short summary of this website in markdown. \
If it includes news or announcements, then summarize these too.\n\n";

pub const AZURE_DEPLOYMENT_ENV: &str = "OPENAI_MODEL_DEPLOYMENT";
pub const AZURE_API_VERSION_ENV: &str = "AZURE_API_VERSION";
pub const AZURE_ENDPOINT_ENV: &str = "AZURE_OPENAI_ENDPOINT";
pub const AZURE_API_KEY_ENV: &str = "AZURE_OPENAI_API_KEY";

pub const LLAMA_ENDPOINT_ENV: &str = "LLAMA_ENDPOINT";
pub const LLAMA_MODEL_ENV: &str = "LLAMA_MODEL";

pub const DEFAULT_LLAMA_ENDPOINT: &str = "http://localhost:11434/api/chat";
pub const DEFAULT_LLAMA_MODEL: &str = "llama3.2";
