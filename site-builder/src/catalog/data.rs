//! Static section registry

use super::{ComponentCategory, Icon, SectionType, TemplateItem};

const ECOMMERCE_ONLY: &[&str] = &["ecommerce"];

const fn template(id: &'static str, name: &'static str, image: &'static str) -> TemplateItem {
    TemplateItem {
        id,
        name,
        image,
        description: None,
        show_for_website_types: None,
    }
}

const fn described(
    id: &'static str,
    name: &'static str,
    image: &'static str,
    description: &'static str,
) -> TemplateItem {
    TemplateItem {
        id,
        name,
        image,
        description: Some(description),
        show_for_website_types: None,
    }
}

const fn ecommerce_only(template: TemplateItem) -> TemplateItem {
    TemplateItem {
        show_for_website_types: Some(ECOMMERCE_ONLY),
        ..template
    }
}

const fn section(
    id: &'static str,
    label: &'static str,
    icon: Icon,
    keywords: &'static [&'static str],
    templates: &'static [TemplateItem],
) -> ComponentCategory {
    ComponentCategory {
        id,
        label,
        icon,
        keywords,
        description: None,
        has_templates: true,
        templates,
        popular: false,
        section_type: SectionType::Section,
        hide_for_service: false,
        show_for_website_types: None,
    }
}

const fn popular(category: ComponentCategory) -> ComponentCategory {
    ComponentCategory {
        popular: true,
        ..category
    }
}

const HERO: &[TemplateItem] = &[
    template("hero-1", "Hero Style 1", "/images/site-owners/hero/hero1.png"),
    template("hero-2", "Hero Style 2", "/images/site-owners/hero/hero2.png"),
    template("hero-3", "Hero Style 3", "/images/site-owners/hero/hero3.png"),
    template("hero-4", "Hero Style 4", "/images/site-owners/hero/hero4.png"),
    template("hero-5", "Hero Style 5", "/images/site-owners/hero/hero5.png"),
    template("hero-6", "Hero Style 6", "/images/site-owners/hero/hero6.png"),
    template("hero-7", "Hero Style 7", "/images/site-owners/hero/hero7.png"),
    template("hero-8", "Hero Style 8", "/images/site-owners/hero/hero8.png"),
    template("hero-9", "Hero Style 9", "/images/site-owners/hero/hero9.png"),
    template("hero-10", "Hero Style 10", "/images/site-owners/hero/hero10.png"),
    template("hero-11", "Hero Style 11", "/images/site-owners/hero/hero11.png"),
    template("hero-12", "Hero Style 12", "/images/site-owners/hero/hero12.png"),
    template("hero-13", "Hero Style 13", "/images/site-owners/hero/hero13.png"),
    template("hero-14", "Hero Style 14", "/images/site-owners/hero/hero14.png"),
];

const CTA: &[TemplateItem] = &[
    described("cta-1", "CTA Style 1", "/images/site-owners/cta/cta1.png", "Clean and modern CTA with centered layout"),
    described("cta-2", "CTA Style 2", "/images/site-owners/cta/cta2.png", "Gradient background with badge"),
    described("cta-3", "CTA Style 3", "/images/site-owners/cta/cta3.png", "Card-style CTA with feature icons"),
    described("cta-4", "CTA Style 4", "/images/site-owners/cta/cta4.png", "Image-based CTA with feature icons"),
];

const APPOINTMENT: &[TemplateItem] = &[
    template("appointment-1", "Appointment Style 1", "/images/site-owners/appointment/appointment1.png"),
    template("appointment-2", "Appointment Style 2", "/images/site-owners/appointment/appointment2.png"),
    template("appointment-3", "Appointment Style 3", "/images/site-owners/appointment/appointment3.png"),
];

const ABOUT: &[TemplateItem] = &[
    template("about-1", "About Style 1", "/images/site-owners/about/about1.png"),
    template("about-2", "About Style 2", "/images/site-owners/about/about2.png"),
    template("about-3", "About Style 3", "/images/site-owners/about/about3.png"),
    template("about-4", "About Style 4", "/images/site-owners/about/about4.png"),
    template("about-5", "About Style 5", "/images/site-owners/about/about5.png"),
    template("about-6", "About Style 6", "/images/site-owners/about/about6.png"),
    template("about-7", "About Style 7", "/images/site-owners/about/about7.png"),
    template("about-8", "About Style 8", "/images/site-owners/about/about8.png"),
    template("about-9", "About Style 9", "/images/site-owners/about/about9.png"),
    template("about-10", "About Style 10", "/images/site-owners/about/about10.png"),
    template("about-11", "About Style 11", "/images/site-owners/about/about11.png"),
    template("about-12", "About Style 12", "/images/site-owners/about/about12.png"),
    template("about-13", "About Style 13", "/images/site-owners/about/about13.png"),
    template("about-14", "About Style 14", "/images/site-owners/about/about14.png"),
];

const PRODUCTS: &[TemplateItem] = &[
    template("product-1", "Product Grid 1", "/images/site-owners/products/product1.png"),
    template("product-2", "Product Grid 2", "/images/site-owners/products/product2.png"),
    template("product-3", "Product List", "/images/site-owners/products/product3.png"),
    template("product-4", "Product Style 4", "/images/site-owners/products/product4.png"),
    template("product-5", "Product Style 5", "/images/site-owners/products/product5.png"),
    template("product-6", "Product Style 6", "/images/site-owners/products/product6.png"),
    template("product-7", "Product Grid 7", "/images/site-owners/products/product2.png"),
];

const CATEGORY: &[TemplateItem] = &[
    template("category-1", "Category Grid 1", "/images/site-owners/categories/category1.png"),
    template("category-2", "Category Grid 2", "/images/site-owners/categories/category2.png"),
    template("category-3", "Category List", "/images/site-owners/categories/category3.png"),
    template("category-4", "Category Style 4", "/images/site-owners/categories/category4.png"),
    template("category-5", "Category Style 5", "/images/site-owners/categories/category5.png"),
];

const SUBCATEGORY: &[TemplateItem] = &[
    template("subcategory-1", "SubCategory Grid 1", "/images/site-owners/subcategories/subcategory1.png"),
    template("subcategory-2", "SubCategory Grid 2", "/images/site-owners/subcategories/subcategory2.png"),
    template("subcategory-3", "SubCategory List", "/images/site-owners/subcategories/subcategory3.png"),
];

const SERVICES: &[TemplateItem] = &[
    template("services-1", "Services Grid 1", "/images/site-owners/services/services-1.png"),
    template("services-2", "Services Grid 2", "/images/site-owners/services/services-2.png"),
    template("services-3", "Services List", "/images/site-owners/services/services-3.png"),
    template("services-4", "Services Style 4", "/images/site-owners/services/services-4.png"),
    template("services-5", "Services Style 5", "/images/site-owners/services/services-5.png"),
];

const CONTACT: &[TemplateItem] = &[
    template("contact-1", "Contact Form 1", "/images/site-owners/contact/contact1.png"),
    template("contact-2", "Contact Form 2", "/images/site-owners/contact/contact2.png"),
    template("contact-3", "Contact Form 3", "/images/site-owners/contact/contact3.png"),
    template("contact-4", "Contact Form 4", "/images/site-owners/contact/contact4.png"),
    template("contact-5", "Contact Form 5", "/images/site-owners/contact/contact5.png"),
    template("contact-6", "Contact Form 6", "/images/site-owners/contact/contact6.png"),
];

const TESTIMONIALS: &[TemplateItem] = &[
    template("testimonial-1", "Testimonials Grid", "/images/site-owners/testimonials/testimonial1.png"),
    template("testimonial-2", "Testimonials Carousel", "/images/site-owners/testimonials/testimonial2.png"),
    template("testimonial-3", "Testimonials Cards", "/images/site-owners/testimonials/testimonial3.png"),
    template("testimonial-4", "Testimonials Style 4", "/images/site-owners/testimonials/testimonial4.png"),
    template("testimonial-5", "Testimonials Style 5", "/images/site-owners/testimonials/testimonial5.png"),
    template("testimonial-6", "Testimonials Style 6", "/images/site-owners/testimonials/testimonial6.png"),
    template("testimonial-7", "Testimonials Style 7", "/images/site-owners/testimonials/testimonial7.png"),
    template("testimonial-8", "Testimonials Style 8", "/images/site-owners/testimonials/testimonial8.png"),
    template("testimonial-9", "Testimonials Style 9", "/images/site-owners/testimonials/testimonial9.png"),
];

const TEAM: &[TemplateItem] = &[
    template("team-1", "Team Grid", "/images/site-owners/team/team1.png"),
    template("team-2", "Team Cards", "/images/site-owners/team/team2.png"),
    template("team-3", "Team List", "/images/site-owners/team/team3.png"),
    template("team-4", "Team Style 4", "/images/site-owners/team/team4.png"),
    template("team-5", "Team Style 5", "/images/site-owners/team/team5.png"),
];

const GALLERY: &[TemplateItem] = &[
    template("gallery-1", "Gallery Grid", "/images/site-owners/gallery/gallery1.png"),
    template("gallery-2", "Gallery Masonry", "/images/site-owners/gallery/gallery2.png"),
    template("gallery-3", "Gallery Carousel", "/images/site-owners/gallery/gallery3.png"),
    template("gallery-4", "Gallery Style 4", "/images/site-owners/gallery/gallery4.png"),
    template("gallery-5", "Gallery Style 5", "/images/site-owners/gallery/gallery5.png"),
    template("gallery-6", "Gallery Style 6", "/images/site-owners/gallery/gallery6.png"),
];

const BANNER: &[TemplateItem] = &[
    template("banner-1", "Banner Style 1", "/images/site-owners/banner/banner1.png"),
    template("banner-2", "Banner Style 2", "/images/site-owners/banner/banner2.png"),
    template("banner-3", "Banner Style 3", "/images/site-owners/banner/banner3.png"),
    template("banner-4", "Banner Style 4", "/images/site-owners/banner/banner4.png"),
];

const BLOG: &[TemplateItem] = &[
    template("blog-1", "Blog Style 1", "/images/site-owners/blogs/blog1.png"),
    template("blog-2", "Blog Style 2", "/images/site-owners/blogs/blog2.png"),
    template("blog-3", "Blog Style 3", "/images/site-owners/blogs/blog3.png"),
    template("blog-4", "Blog Style 4", "/images/site-owners/blogs/blog4.png"),
    template("blog-5", "Blog Style 5", "/images/site-owners/blogs/blog5.png"),
];

const FAQ: &[TemplateItem] = &[
    template("faq-1", "FAQ Style 1", "/images/site-owners/faq/faq-1.png"),
    template("faq-2", "FAQ Style 2", "/images/site-owners/faq/faq-2.png"),
    template("faq-3", "FAQ Style 3", "/images/site-owners/faq/faq-3.png"),
    template("faq-4", "FAQ Style 4", "/images/site-owners/faq/faq-4.png"),
    template("faq-5", "FAQ Style 5", "/images/site-owners/faq/faq-5.png"),
    template("faq-6", "FAQ Style 6", "/images/site-owners/faq/faq-6.png"),
    template("faq-7", "FAQ Style 7", "/images/site-owners/faq/faq-7.png"),
];

const PORTFOLIO: &[TemplateItem] = &[
    template("portfolio-1", "Portfolio Style 1", "/images/site-owners/portfolio/portfolio1.png"),
    template("portfolio-2", "Portfolio Style 2", "/images/site-owners/portfolio/portfolio2.png"),
    template("portfolio-3", "Portfolio Style 3", "/images/site-owners/portfolio/portfolio3.png"),
    template("portfolio-4", "Portfolio Style 4", "/images/site-owners/portfolio/portfolio4.png"),
];

const NEWSLETTER: &[TemplateItem] = &[
    template("newsletter-1", "Newsletter Style 1", "/images/site-owners/newsletter/newsletter1.png"),
    template("newsletter-2", "Newsletter Style 2", "/images/site-owners/newsletter/newsletter2.png"),
    template("newsletter-3", "Newsletter Style 3", "/images/site-owners/newsletter/newsletter3.png"),
];

const YOUTUBE: &[TemplateItem] = &[
    template("youtube-1", "YouTube Style 1", "/images/site-owners/youtube/youtube-1.png"),
    template("youtube-2", "YouTube Style 2", "/images/site-owners/youtube/youtube-2.png"),
    template("youtube-3", "YouTube Style 3", "/images/site-owners/youtube/youtube-3.png"),
];

const POLICIES: &[TemplateItem] = &[described(
    "policies-1",
    "Policy Layout 1",
    "/images/site-owners/policies/policy1.png",
    "Clean policy layout with sidebar navigation",
)];

const PRICING: &[TemplateItem] = &[
    template("pricing-1", "Pricing Style 1", "/images/site-owners/pricing/pricing1.png"),
    template("pricing-2", "Pricing Style 2", "/images/site-owners/pricing/pricing2.png"),
    template("pricing-3", "Pricing Style 3", "/images/site-owners/pricing/pricing3.png"),
];

const TEXT_EDITOR: &[TemplateItem] = &[described(
    "text-editor-1",
    "Text Editor Layout 1",
    "/images/site-owners/text-editor/text1.png",
    "Clean text layout with proper typography",
)];

const NAVBARS: &[TemplateItem] = &[
    ecommerce_only(described("navbar-1", "Navbar Style 1", "/images/site-owners/navbars/navbar1.png", "Simple navbar with logo and navigation links")),
    ecommerce_only(described("navbar-2", "Navbar Centered Logo", "/images/site-owners/navbars/navbar2.png", "Centered logo with navigation on sides")),
    ecommerce_only(described("navbar-3", "Navbar with Search", "/images/site-owners/navbars/navbar3.png", "Includes search functionality")),
    ecommerce_only(described("navbar-4", "Navbar with Categories", "/images/site-owners/navbars/navbar4.png", "Dropdown categories for e-commerce")),
    ecommerce_only(described("navbar-5", "E-commerce Navbar", "/images/site-owners/navbars/navbar5.png", "Full e-commerce navigation with cart")),
    ecommerce_only(described("navbar-6", "E-commerce with Top Bar", "/images/site-owners/navbars/navbar6.png", "Includes top bar for announcements")),
    ecommerce_only(described("navbar-7", "E-commerce with Social Links", "/images/site-owners/navbars/navbar7.png", "Includes Social media links in top bar")),
    described("navbar-8", "Navbar with social links", "/images/site-owners/navbars/navbar8.png", "Includes search functionality"),
    described("navbar-9", "Minimal Navbar", "/images/site-owners/navbars/navbar9.png", "Clean and minimal navbar design"),
];

const FOOTERS: &[TemplateItem] = &[
    described("footer-1", "Footer Style 1", "/images/site-owners/footers/footer1.png", "Simple footer with links and copyright"),
    described("footer-2", "Footer Style 2", "/images/site-owners/footers/footer2.png", "Multi-column footer with social links"),
    described("footer-3", "Footer Style 3", "/images/site-owners/footers/footer3.png", "Modern footer with newsletter signup"),
    described("footer-4", "Footer Style 4", "/images/site-owners/footers/footer4.png", "E-commerce footer with categories"),
    described("footer-5", "Footer Style 5", "/images/site-owners/footers/footer5.png", "Minimal footer with centered content"),
    described("footer-6", "Footer Style 6", "/images/site-owners/footers/footer6.png", "Complex footer with multiple sections"),
    described("footer-7", "Footer Style 7", "/images/site-owners/footers/footer7.png", "Footer with social media links"),
];

pub(super) static NAVBAR: ComponentCategory = ComponentCategory {
    id: "navbar-sections",
    label: "Navbar",
    icon: Icon::Navigation,
    keywords: &["header", "navigation", "menu", "nav"],
    description: None,
    has_templates: true,
    templates: NAVBARS,
    popular: true,
    section_type: SectionType::Navbar,
    hide_for_service: false,
    show_for_website_types: None,
};

pub(super) static FOOTER: ComponentCategory = ComponentCategory {
    id: "footer-sections",
    label: "Footer",
    icon: Icon::Square,
    keywords: &["bottom", "links", "copyright", "social"],
    description: Some("Site footer with multiple layout options"),
    has_templates: true,
    templates: FOOTERS,
    popular: true,
    section_type: SectionType::Footer,
    hide_for_service: false,
    show_for_website_types: None,
};

/// Section categories in declaration order; the catalog sorts them by label.
pub(super) static SECTIONS: &[ComponentCategory] = &[
    popular(section("about-sections", "About Us", Icon::Info, &["company", "who we are", "story", "mission"], ABOUT)),
    section("appointment-sections", "Appointment", Icon::Calendar, &["form", "email", "reach", "message"], APPOINTMENT),
    section("banner-sections", "Banner", Icon::Image, &["banner", "slider", "promotion", "ad"], BANNER),
    section("blog-sections", "Blog", Icon::FileText, &["articles", "posts", "news", "updates"], BLOG),
    popular(section("cta-sections", "Call to Action", Icon::Type, &["cta", "call to action", "button", "action", "conversion"], CTA)),
    ComponentCategory {
        show_for_website_types: Some(ECOMMERCE_ONLY),
        ..section("categories-sections", "Categories", Icon::FolderOpen, &["category", "taxonomy", "organization", "groups"], CATEGORY)
    },
    section("contact-sections", "Contact", Icon::Mail, &["form", "email", "reach", "message"], CONTACT),
    section("faq-sections", "FAQ", Icon::Info, &["questions", "help", "support", "answers"], FAQ),
    section("gallery-sections", "Gallery", Icon::Image, &["images", "photos", "media", "pictures"], GALLERY),
    popular(section("hero-sections", "Hero Section", Icon::Crown, &["banner", "top section", "intro", "welcome"], HERO)),
    section("newsletter-sections", "Newsletter", Icon::Mail, &["subscribe", "email", "updates", "mailing"], NEWSLETTER),
    popular(section("policies-sections", "Policies", Icon::Shield, &["return", "shipping", "privacy", "terms", "policy"], POLICIES)),
    section("portfolio-sections", "Portfolio", Icon::FolderOpen, &["projects", "work", "showcase", "gallery"], PORTFOLIO),
    popular(section("pricing-sections", "Pricing", Icon::DollarSign, &["pricing", "plans", "cost", "subscription"], PRICING)),
    ComponentCategory {
        hide_for_service: true,
        ..popular(section("products-sections", "Products", Icon::Package, &["catalog", "shop", "items", "store"], PRODUCTS))
    },
    popular(section("services-sections", "Services", Icon::Menu, &["what we do", "features", "offerings", "service"], SERVICES)),
    ComponentCategory {
        show_for_website_types: Some(ECOMMERCE_ONLY),
        ..section("subcategories-sections", "SubCategories", Icon::Tag, &["subcategory", "nested", "subgroups"], SUBCATEGORY)
    },
    section("team-members-sections", "Team Members", Icon::Crown, &["employees", "staff", "team", "people"], TEAM),
    section("testimonials-sections", "Testimonials", Icon::Quote, &["reviews", "clients", "feedback", "ratings"], TESTIMONIALS),
    popular(section("text-editor-sections", "Text Editor", Icon::Type, &["editor", "content", "text", "rich text", "custom"], TEXT_EDITOR)),
    section("youtube-sections", "YouTube", Icon::Image, &["video", "embed", "media", "youtube"], YOUTUBE),
];
