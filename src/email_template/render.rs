use std::borrow::Cow;

use super::{EmailTemplate, Occurrences, Placeholder, SubstitutionRules, TemplateError};
use crate::domain::{CampaignParameters, Recipient, TemplateId};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RenderedEmail {
    pub subject: String,
    pub body: String,
}

/// Render `params.email_template_id` for one recipient.
///
/// The subject resolves `{campaign_name}` and `{influencer_name}` once each.
/// The body resolves every placeholder everywhere, except `{custom_message}`
/// which is resolved once.
pub fn render_email(params: &CampaignParameters, recipient: &Recipient) -> RenderedEmail {
    let template = EmailTemplate::for_id(params.email_template_id);
    let context = RenderContext { params, recipient };

    RenderedEmail {
        subject: render_pattern(template.subject_pattern, SubstitutionRules::SUBJECT, |p| {
            context.value(p)
        }),
        body: render_pattern(template.body_pattern, SubstitutionRules::BODY, |p| {
            context.value(p)
        }),
    }
}

/// Parse a template id coming from a client. With a `fallback`, unknown ids
/// resolve to it instead of failing.
pub fn resolve_template_id(
    raw: &str,
    fallback: Option<TemplateId>,
) -> Result<TemplateId, TemplateError> {
    match (TemplateId::parse(raw), fallback) {
        (Ok(id), _) => Ok(id),
        (Err(e), Some(default)) => {
            tracing::warn!(
                error.message = %e,
                fallback = %default,
                "Rendering with the default email template"
            );
            Ok(default)
        }
        (Err(e), None) => Err(e),
    }
}

/// Single left-to-right pass over `pattern`.
///
/// A `{token}` is replaced when `rules` lists its placeholder and the
/// occurrence policy still allows it. Unknown tokens, placeholders outside
/// `rules`, and unmatched braces are copied verbatim. Substituted values are
/// never scanned again.
pub fn render_pattern<'v, F>(pattern: &str, rules: SubstitutionRules, mut value: F) -> String
where
    F: FnMut(Placeholder) -> Cow<'v, str>,
{
    let mut rendered = String::with_capacity(pattern.len());
    let mut substituted: Vec<Placeholder> = Vec::new();
    let mut rest = pattern;

    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let Some(close) = after_open.find('}') else {
            rendered.push_str(&rest[open..]);
            rest = "";
            break;
        };

        let token = &after_open[..close];
        if token.contains('{') {
            // Literal brace; the next one may still open a token.
            rendered.push('{');
            rest = after_open;
            continue;
        }

        let placeholder = Placeholder::from_token(token).filter(|p| {
            match rules.occurrences(*p) {
                Some(Occurrences::All) => true,
                Some(Occurrences::First) => !substituted.contains(p),
                None => false,
            }
        });

        match placeholder {
            Some(p) => {
                rendered.push_str(&value(p));
                substituted.push(p);
            }
            None => rendered.push_str(&rest[open..open + close + 2]),
        }
        rest = &after_open[close + 1..];
    }

    rendered.push_str(rest);
    rendered
}

struct RenderContext<'a> {
    params: &'a CampaignParameters,
    recipient: &'a Recipient,
}

impl<'a> RenderContext<'a> {
    fn value(&self, placeholder: Placeholder) -> Cow<'a, str> {
        match placeholder {
            Placeholder::CampaignName => Cow::Borrowed(&self.params.campaign_name),
            Placeholder::InfluencerName => Cow::Borrowed(&self.recipient.display_name),
            Placeholder::Category => {
                Cow::Borrowed(self.recipient.category.as_deref().unwrap_or_default())
            }
            Placeholder::Deliverables => Cow::Borrowed(&self.params.deliverables),
            Placeholder::Timeline => Cow::Borrowed(&self.params.timeline),
            Placeholder::ProposedRate => self
                .recipient
                .estimated_rate
                .map(|rate| Cow::Owned(format_rate(rate)))
                .unwrap_or_default(),
            Placeholder::CustomMessage => Cow::Borrowed(&self.params.custom_message),
        }
    }
}

/// Plain decimal, as stored: `750`, `1312.5`. No symbol, grouping or rounding.
fn format_rate(rate: f64) -> String {
    rate.to_string()
}
