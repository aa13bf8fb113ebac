//! Footer style selection and the starter footer the builder creates

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SiteBuilderError;
use crate::payload::navbar::LogoType;

/// Footer layout style, serialized as `style-<n>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FooterStyle {
    /// Links and copyright
    #[serde(rename = "style-1")]
    Style1,
    /// Multi-column with social links
    #[serde(rename = "style-2")]
    Style2,
    /// Newsletter signup
    #[serde(rename = "style-3")]
    Style3,
    /// E-commerce categories
    #[serde(rename = "style-4")]
    Style4,
    /// Minimal, centered
    #[serde(rename = "style-5")]
    Style5,
    /// Multiple sections
    #[serde(rename = "style-6")]
    Style6,
    /// Social media links
    #[serde(rename = "style-7")]
    Style7,
}

const STYLES: &[(&str, FooterStyle)] = &[
    ("footer-1", FooterStyle::Style1),
    ("footer-2", FooterStyle::Style2),
    ("footer-3", FooterStyle::Style3),
    ("footer-4", FooterStyle::Style4),
    ("footer-5", FooterStyle::Style5),
    ("footer-6", FooterStyle::Style6),
    ("footer-7", FooterStyle::Style7),
];

impl FooterStyle {
    /// Footer style of a footer template
    ///
    /// # Errors
    ///
    /// Returns [`SiteBuilderError::UnknownTemplate`] for ids that are not footer
    /// templates.
    pub fn for_template(template_id: &str) -> Result<Self, SiteBuilderError> {
        STYLES
            .iter()
            .find(|(id, _)| *id == template_id)
            .map(|(_, style)| *style)
            .ok_or_else(|| SiteBuilderError::UnknownTemplate(template_id.to_string()))
    }

    /// Wire name (`style-<n>`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Style1 => "style-1",
            Self::Style2 => "style-2",
            Self::Style3 => "style-3",
            Self::Style4 => "style-4",
            Self::Style5 => "style-5",
            Self::Style6 => "style-6",
            Self::Style7 => "style-7",
        }
    }
}

/// Footer template ids that map to a style
pub fn footer_template_ids() -> impl Iterator<Item = &'static str> {
    STYLES.iter().map(|(id, _)| *id)
}

/// Link inside a footer column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    /// Link id
    pub id: String,
    /// Link text
    pub text: String,
    /// Target URL
    pub href: String,
}

/// Titled column of links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterSection {
    /// Section id
    pub id: String,
    /// Column title
    pub title: String,
    /// Links in the column
    pub links: Vec<FooterLink>,
}

/// Social profile link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Link id
    pub id: String,
    /// Platform name, also selects the icon
    pub platform: String,
    /// Profile URL
    pub href: String,
}

/// Contact block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
}

/// Newsletter signup block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterBlock {
    /// Whether the block is rendered
    pub enabled: bool,
    /// Heading
    pub title: String,
    /// Copy under the heading
    pub description: String,
}

/// Footer configuration handed to the page builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterData {
    /// Layout style
    pub style: FooterStyle,
    /// Logo text
    pub logo_text: String,
    /// Logo rendering
    pub logo_type: LogoType,
    /// Logo image URL
    pub logo_image: String,
    /// Company name
    pub company_name: String,
    /// Short company description
    pub description: String,
    /// Link columns
    pub sections: Vec<FooterSection>,
    /// Social links
    pub social_links: Vec<SocialLink>,
    /// Contact details
    pub contact_info: ContactInfo,
    /// Newsletter block
    pub newsletter: NewsletterBlock,
    /// Copyright line
    pub copyright: String,
}

fn footer_link(id: &str, text: &str) -> FooterLink {
    FooterLink {
        id: id.to_string(),
        text: text.to_string(),
        href: "#".to_string(),
    }
}

fn social(id: &str, platform: &str) -> SocialLink {
    SocialLink {
        id: id.to_string(),
        platform: platform.to_string(),
        href: "#".to_string(),
    }
}

impl FooterData {
    /// Starter footer for `style`, copyrighted for the current year
    #[must_use]
    pub fn starter(style: FooterStyle) -> Self {
        Self::starter_for_year(style, Utc::now().year())
    }

    /// Starter footer for `style` with an explicit copyright year
    #[must_use]
    pub fn starter_for_year(style: FooterStyle, year: i32) -> Self {
        Self {
            style,
            logo_text: "Your Brand".to_string(),
            logo_type: LogoType::Text,
            logo_image: String::new(),
            company_name: "Your Brand".to_string(),
            description:
                "Innovative solutions for a modern world. We build amazing experiences."
                    .to_string(),
            sections: vec![
                FooterSection {
                    id: "s1".to_string(),
                    title: "Company".to_string(),
                    links: vec![footer_link("l1", "About Us"), footer_link("l2", "Careers")],
                },
                FooterSection {
                    id: "s2".to_string(),
                    title: "Resources".to_string(),
                    links: vec![footer_link("l3", "Blog"), footer_link("l4", "Help Center")],
                },
            ],
            social_links: vec![social("soc1", "Facebook"), social("soc2", "Twitter")],
            contact_info: ContactInfo {
                email: "support@yourbrand.com".to_string(),
                phone: "+1 234 567 890".to_string(),
            },
            newsletter: NewsletterBlock {
                enabled: true,
                title: "Join our Newsletter".to_string(),
                description: "Get the latest news and updates delivered to your inbox."
                    .to_string(),
            },
            copyright: format!("© {year} Your Brand. All Rights Reserved."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_3_is_style_3() {
        let style = FooterStyle::for_template("footer-3").unwrap();
        assert_eq!(style, FooterStyle::Style3);
        assert_eq!(style.as_str(), "style-3");
        assert_eq!(serde_json::to_string(&style).unwrap(), r#""style-3""#);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        assert_eq!(
            FooterStyle::for_template("footer-99"),
            Err(SiteBuilderError::UnknownTemplate("footer-99".into()))
        );
        assert!(FooterStyle::for_template("hero-3").is_err());
    }

    #[test]
    fn test_starter_footer() {
        let footer = FooterData::starter_for_year(FooterStyle::Style2, 2026);
        assert_eq!(footer.copyright, "© 2026 Your Brand. All Rights Reserved.");
        assert_eq!(footer.sections.len(), 2);
        assert!(footer.newsletter.enabled);

        let json = serde_json::to_value(&footer).unwrap();
        assert_eq!(json["style"], "style-2");
        assert_eq!(json["companyName"], "Your Brand");
        assert_eq!(json["contactInfo"]["email"], "support@yourbrand.com");
        assert_eq!(json["socialLinks"][1]["platform"], "Twitter");
    }
}
