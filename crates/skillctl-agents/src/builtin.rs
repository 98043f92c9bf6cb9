use crate::definition::AgentDefinition;

struct Builtin {
    id: &'static str,
    display_name: &'static str,
    project_dir: &'static str,
    global_dir: &'static str,
    detect_paths: &'static [&'static str],
}

const fn builtin(
    id: &'static str,
    display_name: &'static str,
    project_dir: &'static str,
    global_dir: &'static str,
    detect_paths: &'static [&'static str],
) -> Builtin {
    Builtin {
        id,
        display_name,
        project_dir,
        global_dir,
        detect_paths,
    }
}

// Several agents share `.agents/skills` as their project directory.
const BUILTIN_AGENTS: &[Builtin] = &[
    builtin("adal", "AdaL", ".adal/skills", "~/.adal/skills", &["~/.adal"]),
    builtin("amp", "Amp", ".agents/skills", "~/.config/agents/skills", &["~/.config/amp"]),
    builtin("antigravity", "Antigravity", ".agent/skills", "~/.gemini/antigravity/skills", &["~/.gemini/antigravity"]),
    builtin("augment", "Augment", ".augment/skills", "~/.augment/skills", &["~/.augment"]),
    builtin("claude-code", "Claude Code", ".claude/skills", "~/.claude/skills", &["~/.claude"]),
    builtin("cline", "Cline", ".cline/skills", "~/.cline/skills", &["~/.cline"]),
    builtin("codebuddy", "CodeBuddy", ".codebuddy/skills", "~/.codebuddy/skills", &["~/.codebuddy"]),
    builtin("codex", "Codex", ".agents/skills", "~/.codex/skills", &["~/.codex"]),
    builtin("command-code", "Command Code", ".commandcode/skills", "~/.commandcode/skills", &["~/.commandcode"]),
    builtin("continue", "Continue", ".continue/skills", "~/.continue/skills", &["~/.continue"]),
    builtin("crush", "Crush", ".crush/skills", "~/.config/crush/skills", &["~/.config/crush"]),
    builtin("cursor", "Cursor", ".cursor/skills", "~/.cursor/skills", &["~/.cursor"]),
    builtin("droid", "Droid", ".factory/skills", "~/.factory/skills", &["~/.factory/skills"]),
    builtin("gemini-cli", "Gemini CLI", ".agents/skills", "~/.gemini/skills", &["~/.gemini"]),
    builtin("github-copilot", "GitHub Copilot", ".agents/skills", "~/.copilot/skills", &["~/.copilot"]),
    builtin("goose", "Goose", ".goose/skills", "~/.config/goose/skills", &["~/.config/goose"]),
    builtin("iflow-cli", "iFlow CLI", ".iflow/skills", "~/.iflow/skills", &["~/.iflow"]),
    builtin("junie", "Junie", ".junie/skills", "~/.junie/skills", &["~/.junie"]),
    builtin("kilo", "Kilo Code", ".kilocode/skills", "~/.kilocode/skills", &["~/.kilocode"]),
    builtin("kimi-cli", "Kimi Code CLI", ".agents/skills", "~/.config/agents/skills", &["~/.config/kimi"]),
    builtin("kiro-cli", "Kiro CLI", ".kiro/skills", "~/.kiro/skills", &["~/.kiro"]),
    builtin("kode", "Kode", ".kode/skills", "~/.kode/skills", &["~/.kode"]),
    builtin("mcpjam", "MCPJam", ".mcpjam/skills", "~/.mcpjam/skills", &["~/.mcpjam"]),
    builtin("mistral-vibe", "Mistral Vibe", ".vibe/skills", "~/.vibe/skills", &["~/.vibe"]),
    builtin("mux", "Mux", ".mux/skills", "~/.mux/skills", &["~/.mux"]),
    builtin("neovate", "Neovate", ".neovate/skills", "~/.neovate/skills", &["~/.neovate"]),
    builtin("openclaw", "OpenClaw", "skills", "~/.openclaw/skills", &["~/.openclaw", "~/.clawdbot"]),
    builtin("opencode", "OpenCode", ".agents/skills", "~/.config/opencode/skills", &["~/.config/opencode"]),
    builtin("openhands", "OpenHands", ".openhands/skills", "~/.openhands/skills", &["~/.openhands"]),
    builtin("pi", "Pi", ".pi/skills", "~/.pi/agent/skills", &["~/.pi"]),
    builtin("pochi", "Pochi", ".pochi/skills", "~/.pochi/skills", &["~/.pochi"]),
    builtin("qoder", "Qoder", ".qoder/skills", "~/.qoder/skills", &["~/.qoder"]),
    builtin("qwen-code", "Qwen Code", ".qwen/skills", "~/.qwen/skills", &["~/.qwen"]),
    builtin("replit", "Replit", ".agents/skills", "~/.config/agents/skills", &["~/.replit"]),
    builtin("roo", "Roo Code", ".roo/skills", "~/.roo/skills", &["~/.roo"]),
    builtin("trae", "Trae", ".trae/skills", "~/.trae/skills", &["~/.trae"]),
    builtin("trae-cn", "Trae CN", ".trae/skills", "~/.trae-cn/skills", &["~/.trae-cn"]),
    builtin("windsurf", "Windsurf", ".windsurf/skills", "~/.codeium/windsurf/skills", &["~/.codeium/windsurf"]),
    builtin("zencoder", "Zencoder", ".zencoder/skills", "~/.zencoder/skills", &["~/.zencoder"]),
];

/// The agents skillctl knows about out of the box, sorted by id.
pub fn builtin_agents() -> Vec<AgentDefinition> {
    BUILTIN_AGENTS
        .iter()
        .map(|b| AgentDefinition {
            id: b.id.to_string(),
            display_name: b.display_name.to_string(),
            project_dir: b.project_dir.to_string(),
            global_dir: b.global_dir.to_string(),
            detect_paths: b.detect_paths.iter().map(|p| p.to_string()).collect(),
        })
        .collect()
}
