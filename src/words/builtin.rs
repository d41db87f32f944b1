//! Built-in word list
//!
//! Compiled into the binary and used whenever no other source is available.

/// AI and technology words, 2-8 letters
pub const BUILTIN_WORDS: &[&str] = &[
    // 2
    "AI", "ML", "OS", "UI", "UX", "AR", "VR", "IO", "DB", "JS",
    // 3
    "API", "GPU", "CPU", "NLP", "CNN", "RNN", "SQL", "XML", "CSS", "DOM", "RAM", "SSD", "USB",
    "TCP", "URL", "SDK", "IDE",
    // 4
    "CODE", "DATA", "BERT", "CLIP", "CUDA", "JSON", "HTML", "HTTP", "AJAX", "BASH", "JAVA",
    "RUST", "RUBY", "PERL", "NODE",
    // 5
    "MODEL", "AGENT", "LOGIC", "TRAIN", "LEARN", "ROBOT", "CLOUD", "STACK", "QUERY", "INDEX",
    "CACHE", "TOKEN", "PARSE",
    // 6
    "NEURAL", "PROMPT", "OPENAI", "CLAUDE", "PYTHON", "TENSOR", "MATRIX", "VECTOR", "BINARY",
    "SYNTAX", "DEPLOY", "GITHUB",
    // 7
    "MACHINE", "NETWORK", "PATTERN", "COMPUTE", "PROCESS", "COMPILE", "EXECUTE", "PROGRAM",
    "BACKEND", "DATASET", "BROWSER",
    // 8
    "LEARNING", "TRAINING", "COMPUTER", "FUNCTION", "VARIABLE", "OPERATOR", "DATABASE",
    "SOFTWARE", "HARDWARE", "INTERNET", "FRONTEND",
];
