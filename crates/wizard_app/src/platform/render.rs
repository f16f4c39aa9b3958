use std::fmt::Write;

use wizard_core::{
    ContentView, GeneratedContent, RequestAction, Stage, WizardViewModel, LINKEDIN_CHAR_LIMIT,
    TWEET_CHAR_LIMIT,
};

const RULE: &str = "------------------------------------------------------------";

pub fn render(view: &WizardViewModel) -> String {
    let mut out = String::new();
    let step = match view.stage {
        Stage::CampaignInput => "Step 1/3: Campaign",
        Stage::KeywordSelection => "Step 2/3: Keywords",
        Stage::ContentOutput => "Step 3/3: Content",
    };
    let _ = writeln!(out, "{RULE}\n{step}");

    if let Some(error) = &view.error {
        let _ = writeln!(out, "! {error}  (type 'dismiss' to hide)");
    }
    if let Some(action) = view.busy {
        let _ = writeln!(out, "{}", busy_label(action));
    }

    match view.stage {
        Stage::CampaignInput => render_campaign(&mut out, view),
        Stage::KeywordSelection => render_keywords(&mut out, view),
        Stage::ContentOutput => render_content(&mut out, view),
    }

    if view.can_resume {
        let _ = writeln!(out, "(type 'resume' to return to the next step)");
    }
    out
}

fn busy_label(action: RequestAction) -> &'static str {
    match action {
        RequestAction::Keywords => "Generating keywords...",
        RequestAction::Content => "Generating content...",
        RequestAction::Regenerate => "Regenerating content...",
    }
}

fn render_campaign(out: &mut String, view: &WizardViewModel) {
    let draft = &view.draft;
    let _ = writeln!(out, "  Description:     {}", placeholder(&draft.description));
    let _ = writeln!(out, "  Target audience: {}", placeholder(&draft.target_audience));
    let _ = writeln!(out, "  Tone:            {}", draft.tone.label());
    let _ = writeln!(out, "  Content type:    {}", draft.content_type.label());
}

fn render_keywords(out: &mut String, view: &WizardViewModel) {
    for (i, keyword) in view.keywords.iter().enumerate() {
        let mark = if keyword.selected { 'x' } else { ' ' };
        let _ = writeln!(out, "  {:>2}. [{mark}] {}", i + 1, keyword.text);
    }
    let _ = writeln!(
        out,
        "  {} of {} selected",
        view.selected_count,
        view.keywords.len()
    );
}

fn render_content(out: &mut String, view: &WizardViewModel) {
    let Some(content) = &view.content else {
        let _ = writeln!(out, "  (no content yet)");
        return;
    };
    let _ = writeln!(out, "  {}", content.title);
    let _ = writeln!(out, "  {}", metric_line(content));
    if !view.generated_with.is_empty() {
        let _ = writeln!(out, "  Keywords: {}", view.generated_with.join(", "));
    }

    let seo = content.content.seo();
    if !seo.meta_title.is_empty() {
        let _ = writeln!(out, "  Meta title: {}", seo.meta_title);
    }
    if !seo.meta_description.is_empty() {
        let _ = writeln!(out, "  Meta description: {}", seo.meta_description);
    }

    let _ = writeln!(out, "{RULE}");
    if let GeneratedContent::TwitterThread { tweets, .. } = &content.content {
        for (i, tweet) in tweets.iter().enumerate() {
            let len = tweet.chars().count();
            let flag = if len > TWEET_CHAR_LIMIT { " over limit" } else { "" };
            let _ = writeln!(out, "[{}] ({len}/{TWEET_CHAR_LIMIT}{flag})", i + 1);
        }
    }
    // Exactly the text `edit` replaces.
    let _ = writeln!(out, "{}", content.content.editable_text().trim_end());
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{}", edit_hint(&content.content));

    if view.exporting {
        let _ = writeln!(out, "Exporting...");
    } else if let Some(location) = &view.last_export {
        let _ = writeln!(out, "Exported to {location}");
    }
}

fn edit_hint(content: &GeneratedContent) -> &'static str {
    match content {
        GeneratedContent::TwitterThread { .. } => {
            "edit <text> replaces the thread; separate tweets with \\n\\n"
        }
        GeneratedContent::LinkedInPost { .. } => "edit <text> replaces the post",
        GeneratedContent::Article { .. } | GeneratedContent::CaseStudy { .. } => {
            "edit <html> replaces the HTML body"
        }
    }
}

fn metric_line(content: &ContentView) -> String {
    let mut line = format!("{} {}", content.metric, content.metric_label);
    if let GeneratedContent::LinkedInPost { .. } = content.content {
        line.push_str(&format!(" (limit {LINKEDIN_CHAR_LIMIT})"));
    }
    if content.over_limit {
        line.push_str(", over the platform limit");
    }
    if content.edited {
        line.push_str(", edited");
    }
    line
}

fn placeholder(text: &str) -> &str {
    if text.trim().is_empty() {
        "(empty)"
    } else {
        text
    }
}
