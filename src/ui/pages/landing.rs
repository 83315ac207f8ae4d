//! Landing page component
//!
//! Marketing page for the Saki-Doruma expense manager:
//! - Header with section navigation (highlighted by the nav spy) and the auth area
//! - Hero with call-to-action buttons
//! - Features, benefits, pricing and testimonial sections (cards fade in on scroll)
//! - Contact call-to-action and footer
//! - Login overlay, logout confirmation and toast notifications

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::PageConfig;
use crate::ui::auth::{LoginModal, UserMenu, use_auth_context};
use crate::ui::notifications::NotificationsContainer;
use crate::ui::page_controller::{scroll_to_section, use_page_setup};

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = use_auth_context();
    let config = use_context::<PageConfig>().unwrap_or_default();

    // Reveal observer and nav spy, once the markup is in the document
    use_page_setup(config);

    let on_get_started = move |_: leptos::ev::MouseEvent| {
        if auth.is_logged_in() {
            scroll_to_section("pricing");
        } else {
            auth.open_login_modal();
        }
    };

    view! {
        <Title text="Saki-Doruma - Personal Expense Manager"/>
        <Meta
            name="description"
            content="Track expenses, split bills and understand where your money goes with Saki-Doruma."
        />

        <Header />

        <main>
            // Hero Section
            <section id="home" class="hero">
                <div class="container hero-content">
                    <h1 class="hero-title">"Know where every coin goes"</h1>
                    <p class="hero-subtitle">
                        "Saki-Doruma keeps your expenses, budgets and reports in one calm, fast desktop app."
                    </p>
                    <div class="hero-actions">
                        <button type="button" class="btn btn-primary btn-lg" on:click=on_get_started>
                            "Get Started"
                        </button>
                        <button
                            type="button"
                            class="btn btn-secondary btn-lg"
                            on:click=move |_| scroll_to_section("features")
                        >
                            "Learn More"
                        </button>
                    </div>
                </div>
            </section>

            // Features Section
            <section id="features" class="section">
                <div class="container">
                    <SectionHeading
                        title="Everything you need to stay on budget"
                        subtitle="Built for people who want clarity, not spreadsheets."
                    />
                    <div class="grid grid-3">
                        <FeatureCard
                            icon="💳"
                            title="Expense Tracking"
                            description="Log purchases in seconds with categories, payment methods and notes."
                        />
                        <FeatureCard
                            icon="🧮"
                            title="Built-in Calculator"
                            description="Split bills, add tips and convert totals without leaving the app."
                        />
                        <FeatureCard
                            icon="📊"
                            title="Analytics"
                            description="Monthly trends and category breakdowns show where your money goes."
                        />
                        <FeatureCard
                            icon="🗂️"
                            title="Smart Categories"
                            description="Start with sensible defaults and shape them around your life."
                        />
                        <FeatureCard
                            icon="📤"
                            title="Export Anywhere"
                            description="Export reports to CSV or JSON for your accountant or your own tools."
                        />
                        <FeatureCard
                            icon="🌙"
                            title="Dark Mode"
                            description="Easy on the eyes during late-night budgeting sessions."
                        />
                    </div>
                </div>
            </section>

            // Benefits Section
            <section id="benefits" class="section section-alt">
                <div class="container">
                    <SectionHeading
                        title="Why Saki-Doruma?"
                        subtitle="Small habits, visible results."
                    />
                    <div class="benefits-list">
                        <BenefitItem
                            title="Private by default"
                            description="Your data stays on your machine. No account is needed to track expenses."
                        />
                        <BenefitItem
                            title="Fast entry"
                            description="Keyboard-first forms make logging an expense quicker than finding your receipt."
                        />
                        <BenefitItem
                            title="Clear reports"
                            description="See totals per day, week and month at a glance."
                        />
                        <BenefitItem
                            title="Works offline"
                            description="No connection required, ever."
                        />
                    </div>
                </div>
            </section>

            // Pricing Section
            <section id="pricing" class="section">
                <div class="container">
                    <SectionHeading
                        title="Simple pricing"
                        subtitle="Start free. Upgrade when you want more."
                    />
                    <div class="grid grid-3">
                        <PricingCard
                            name="Free"
                            price="$0"
                            period="forever"
                            features=vec!["Unlimited expenses", "Basic categories", "Monthly summary"]
                        />
                        <PricingCard
                            name="Plus"
                            price="$4"
                            period="per month"
                            features=vec!["Everything in Free", "Advanced analytics", "CSV & JSON export"]
                            highlighted=true
                        />
                        <PricingCard
                            name="Family"
                            price="$9"
                            period="per month"
                            features=vec!["Everything in Plus", "Up to 5 profiles", "Shared budgets"]
                        />
                    </div>
                </div>
            </section>

            // Testimonials Section
            <section id="testimonials" class="section section-alt">
                <div class="container">
                    <SectionHeading
                        title="Loved by careful spenders"
                        subtitle="What our users say."
                    />
                    <div class="grid grid-3">
                        <TestimonialCard
                            quote="I finally stopped wondering where my salary went by the 20th."
                            author="Aiko M."
                            role="Designer"
                        />
                        <TestimonialCard
                            quote="The calculator for splitting dinners alone is worth it."
                            author="Daniel R."
                            role="Student"
                        />
                        <TestimonialCard
                            quote="Clean, quick and it never asks me to sign up for anything."
                            author="Priya S."
                            role="Freelancer"
                        />
                    </div>
                </div>
            </section>

            // Call to action
            <section id="contact" class="section cta">
                <div class="container">
                    <h2>"Ready to take control of your spending?"</h2>
                    <p>"Download Saki-Doruma and log your first expense in under a minute."</p>
                    <button type="button" class="btn btn-primary btn-lg" on:click=on_get_started>
                        "Get Started"
                    </button>
                </div>
            </section>
        </main>

        <Footer />

        <LoginModal />
        <NotificationsContainer />
    }
}

/// Header with navigation and auth area
#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="navbar">
            <div class="container navbar-inner">
                <a href="#home" class="logo">"Saki-Doruma"</a>
                <nav>
                    <ul class="nav-menu">
                        <li><a href="#features">"Features"</a></li>
                        <li><a href="#benefits">"Benefits"</a></li>
                        <li><a href="#pricing">"Pricing"</a></li>
                        <li><a href="#testimonials">"Testimonials"</a></li>
                    </ul>
                </nav>
                <div class="nav-auth">
                    <UserMenu />
                </div>
            </div>
        </header>
    }
}

#[component]
fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="section-heading">
            <h2>{title}</h2>
            <p>{subtitle}</p>
        </div>
    }
}

/// Feature card component
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-icon" aria-hidden="true">{icon}</div>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

#[component]
fn BenefitItem(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="benefit-item">
            <span class="benefit-check" aria-hidden="true">"✓"</span>
            <div>
                <h4>{title}</h4>
                <p>{description}</p>
            </div>
        </div>
    }
}

/// Pricing card component
#[component]
fn PricingCard(
    name: &'static str,
    price: &'static str,
    period: &'static str,
    features: Vec<&'static str>,
    #[prop(default = false)] highlighted: bool,
) -> impl IntoView {
    let auth = use_auth_context();
    let (class, button_class) = if highlighted {
        ("pricing-card pricing-card-featured", "btn btn-primary btn-block")
    } else {
        ("pricing-card", "btn btn-secondary btn-block")
    };

    view! {
        <div class=class>
            <h3>{name}</h3>
            <div class="price">
                <span class="price-amount">{price}</span>
                <span class="price-period">{period}</span>
            </div>
            <ul class="price-features">
                {features.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}
            </ul>
            <button
                type="button"
                class=button_class
                on:click=move |_| {
                    if !auth.is_logged_in() {
                        auth.open_login_modal();
                    }
                }
            >
                "Choose " {name}
            </button>
        </div>
    }
}

#[component]
fn TestimonialCard(
    quote: &'static str,
    author: &'static str,
    role: &'static str,
) -> impl IntoView {
    view! {
        <div class="testimonial-card">
            <p class="testimonial-quote">"“" {quote} "”"</p>
            <div class="testimonial-author">
                <strong>{author}</strong>
                <span>{role}</span>
            </div>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p>"© 2026 Saki-Doruma. Made by the Expense Management Team."</p>
            </div>
        </footer>
    }
}

/// CSS for the landing page, including the nav highlight and the toast and
/// reveal keyframes referenced from Rust
#[component]
pub fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            :root {
                --primary: #00ff99;
                --primary-dark: #00cc66;
                --text: #111827;
                --muted: #4b5563;
                --bg-alt: #f3f4f6;
            }

            * { box-sizing: border-box; }
            body { margin: 0; font-family: system-ui, sans-serif; color: var(--text); }
            .container { max-width: 1100px; margin: 0 auto; padding: 0 1.5rem; }

            /* Header */
            .navbar {
                position: sticky; top: 0; z-index: 100;
                background: rgba(255, 255, 255, 0.92);
                backdrop-filter: blur(8px);
                border-bottom: 1px solid #e5e7eb;
            }
            .navbar-inner { display: flex; align-items: center; justify-content: space-between; height: 64px; }
            .logo { font-weight: 700; font-size: 1.25rem; color: var(--text); text-decoration: none; }
            .nav-menu { display: flex; gap: 1.5rem; list-style: none; margin: 0; padding: 0; }
            .nav-menu a { color: var(--muted); text-decoration: none; font-weight: 500; }
            .nav-menu a.active {
                color: var(--primary-dark) !important;
                border-bottom: 2px solid var(--primary-dark);
                padding-bottom: 0.25rem;
            }
            .user-menu .user-greeting { margin-right: 0.75rem; font-weight: 600; }

            /* Buttons */
            .btn { padding: 0.6rem 1.2rem; border-radius: 8px; border: none; font-weight: 600; cursor: pointer; }
            .btn-primary { background: var(--primary); color: #000; }
            .btn-primary:hover { background: var(--primary-dark); }
            .btn-secondary { background: transparent; border: 2px solid var(--primary-dark); color: var(--text); }
            .btn-lg { padding: 0.9rem 1.8rem; font-size: 1.05rem; }
            .btn-block { width: 100%; }

            /* Sections */
            .hero { min-height: 80vh; display: flex; align-items: center; text-align: center; }
            .hero-title { font-size: 3rem; margin-bottom: 1rem; }
            .hero-subtitle { font-size: 1.25rem; color: var(--muted); max-width: 640px; margin: 0 auto 2rem; }
            .hero-actions { display: flex; gap: 1rem; justify-content: center; }
            .section { padding: 5rem 0; }
            .section-alt { background: var(--bg-alt); }
            .section-heading { text-align: center; margin-bottom: 3rem; }
            .section-heading p { color: var(--muted); }
            .grid { display: grid; gap: 1.5rem; }
            .grid-3 { grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); }
            .feature-card, .pricing-card, .testimonial-card {
                background: #fff; border: 1px solid #e5e7eb; border-radius: 12px; padding: 1.5rem;
            }
            .feature-icon { font-size: 2rem; }
            .benefits-list { display: grid; gap: 1rem; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); }
            .benefit-item { display: flex; gap: 0.75rem; }
            .benefit-check { color: var(--primary-dark); font-weight: 700; }
            .pricing-card-featured { border: 2px solid var(--primary-dark); }
            .price-amount { font-size: 2.5rem; font-weight: 700; }
            .price-period { color: var(--muted); margin-left: 0.25rem; }
            .price-features { padding-left: 1.2rem; }
            .testimonial-quote { font-style: italic; }
            .testimonial-author span { display: block; color: var(--muted); }
            .cta { text-align: center; }
            .footer { padding: 2rem 0; text-align: center; color: var(--muted); border-top: 1px solid #e5e7eb; }

            /* Overlays */
            .modal {
                display: none; position: fixed; inset: 0; z-index: 1000;
                background: rgba(0, 0, 0, 0.5);
                align-items: center; justify-content: center;
            }
            .modal.active { display: flex; }
            .modal-content {
                position: relative; background: #fff; border-radius: 12px;
                padding: 2rem; width: 100%; max-width: 420px;
            }
            .modal-close {
                position: absolute; top: 0.75rem; right: 0.75rem;
                background: none; border: none; font-size: 1.5rem; cursor: pointer;
            }
            .form-group { display: flex; flex-direction: column; gap: 0.35rem; margin-bottom: 1rem; }
            .form-group input[type="email"], .form-group input[type="password"] {
                padding: 0.6rem; border: 1px solid #d1d5db; border-radius: 8px;
            }
            .form-check { flex-direction: row; align-items: center; }
            .confirm-actions { display: flex; justify-content: flex-end; gap: 0.5rem; }

            /* Not found */
            .not-found { min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; }
            .not-found-code { font-size: 4rem; margin: 0; }

            #alert-container .alert {
                margin-bottom: 0.5rem;
            }

            @keyframes slideIn {
                from {
                    transform: translateX(400px);
                    opacity: 0;
                }
                to {
                    transform: translateX(0);
                    opacity: 1;
                }
            }

            @keyframes slideOut {
                from {
                    transform: translateX(0);
                    opacity: 1;
                }
                to {
                    transform: translateX(400px);
                    opacity: 0;
                }
            }

            @keyframes fadeInUp {
                from {
                    opacity: 0;
                    transform: translateY(20px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }
            "#
        </style>
    }
}
