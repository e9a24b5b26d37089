use crate::i18n::Strings;

/// What the debug window reports on.
pub struct DebugSnapshot<'a> {
    pub web_app_url: &'a str,
    pub calendar_id: &'a str,
    pub settings_file_exists: bool,
    pub log_file_exists: bool,
    pub editor_text: &'a str,
}

pub fn debug_info(snapshot: &DebugSnapshot<'_>, strings: &Strings) -> String {
    let or_missing = |value: &str| {
        if value.trim().is_empty() {
            strings.debug_not_configured.to_string()
        } else {
            value.to_string()
        }
    };
    let yes_no = |flag: bool| if flag { strings.debug_yes } else { strings.debug_no };

    let editor = snapshot.editor_text.trim();
    let content = if editor.is_empty() {
        strings.debug_empty
    } else {
        strings.debug_present
    };

    let mut lines = vec![
        strings.debug_heading.to_string(),
        String::new(),
        strings.debug_current_config.to_string(),
        format!("• Web App URL: {}", or_missing(snapshot.web_app_url)),
        format!("• Calendar ID: {}", or_missing(snapshot.calendar_id)),
        String::new(),
        strings.debug_files.to_string(),
        format!("• {}: {}", strings.debug_settings_exists, yes_no(snapshot.settings_file_exists)),
        format!("• {}: {}", strings.debug_log_exists, yes_no(snapshot.log_file_exists)),
        String::new(),
        strings.debug_editor.to_string(),
        format!("• {}: {}", strings.debug_content, content),
        format!("• {}: {} {}", strings.debug_size, editor.chars().count(), strings.debug_characters),
        String::new(),
        strings.debug_tips_heading.to_string(),
    ];
    lines.extend(strings.debug_tips.iter().map(|tip| format!("• {tip}")));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{ENGLISH, PORTUGUESE};

    #[test]
    fn unconfigured_and_empty() {
        let text = debug_info(
            &DebugSnapshot {
                web_app_url: "",
                calendar_id: " ",
                settings_file_exists: false,
                log_file_exists: true,
                editor_text: "\n  \n",
            },
            &ENGLISH,
        );

        assert!(text.contains("• Web App URL: [NOT CONFIGURED]"));
        assert!(text.contains("• Calendar ID: [NOT CONFIGURED]"));
        assert!(text.contains("• settings file exists: NO"));
        assert!(text.contains("• log file exists: YES"));
        assert!(text.contains("• Content: [EMPTY]"));
        assert!(text.contains("• Size: 0 characters"));
    }

    #[test]
    fn configured_counts_trimmed_characters() {
        let text = debug_info(
            &DebugSnapshot {
                web_app_url: "https://script.google.com/macros/s/abc/exec",
                calendar_id: "primary",
                settings_file_exists: true,
                log_file_exists: false,
                editor_text: "  {\"título\":1}  ",
            },
            &PORTUGUESE,
        );

        assert!(text.contains("• Web App URL: https://script.google.com/macros/s/abc/exec"));
        assert!(text.contains("• Calendar ID: primary"));
        assert!(text.contains("• Conteúdo: [PRESENTE]"));
        assert!(text.contains("• Tamanho: 12 caracteres"));
    }
}
