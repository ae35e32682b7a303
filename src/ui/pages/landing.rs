//! Landing page component
//!
//! The scroll-animated marketing page for Survade featuring:
//! - SEO meta tags for search engine optimization
//! - Fixed navbar that gains a shadow once the page is scrolled
//! - Hero section with a parallax background and waitlist call-to-action
//! - Features section with benefit cards revealed on scroll
//! - How-it-works section with numbered steps
//! - Testimonials section
//! - Waitlist section hosting the sign-up form
//! - Footer

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::effects::{navbar_elevated, parallax_offset, stagger_delay_ms};
use crate::ui::common::CtaButton;
use crate::ui::{WaitlistForm, provide_scroll_position, scroll_to_section};

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    // One window listener feeds every scroll-driven effect on the page
    let scroll_y = provide_scroll_position();

    view! {
        // SEO Meta Tags
        <SeoMeta />

        <div class="landing">
            <Navbar scroll_y=scroll_y />

            // Hero Section
            <section class="hero" id="hero">
                // Parallax backdrop, driven by the shared scroll signal
                <div
                    class="hero-background"
                    style:transform=move || {
                        format!("translateY({}px)", parallax_offset(scroll_y.get()))
                    }
                    aria-hidden="true"
                ></div>

                <div class="hero-content">
                    <h1 class="hero-title">
                        "Patient surveys that " <span class="accent">"write themselves"</span>
                    </h1>
                    <p class="hero-subtitle">
                        "Survade drafts, sends, and analyzes patient surveys for your "
                        "practice. Spend minutes on feedback, not afternoons."
                    </p>
                    <CtaButton on_press=move |_| scroll_to_section("waitlist")>
                        "Join the Waitlist"
                    </CtaButton>
                </div>

                <div class="scroll-indicator" aria-hidden="true">
                    <ChevronDownIcon />
                </div>
            </section>

            // Features Section
            <section class="features" id="features">
                <div class="section-inner">
                    <h2 class="section-title animate-on-scroll">"Why Survade?"</h2>
                    <p class="section-subtitle animate-on-scroll">
                        "Everything a busy practice needs to understand its patients."
                    </p>

                    <div class="features-grid">
                        <FeatureCard
                            index=0
                            icon="✨"
                            title="AI-Drafted Surveys"
                            description="Describe what you want to learn and get a ready-to-send survey, phrased for patients."
                        />
                        <FeatureCard
                            index=1
                            icon="💬"
                            title="Smart Follow-Ups"
                            description="Answers that need clarification trigger one gentle follow-up question automatically."
                        />
                        <FeatureCard
                            index=2
                            icon="📊"
                            title="Instant Analysis"
                            description="Responses roll up into trends and summaries the moment they arrive."
                        />
                        <FeatureCard
                            index=3
                            icon="🔒"
                            title="Privacy First"
                            description="Patient data stays encrypted end to end and is never used to train models."
                        />
                        <FeatureCard
                            index=4
                            icon="📱"
                            title="Any Device"
                            description="Patients answer from a text message link. No app, no account, no friction."
                        />
                        <FeatureCard
                            index=5
                            icon="🗂"
                            title="EHR-Ready Exports"
                            description="Push structured results straight into the systems your practice already uses."
                        />
                    </div>
                </div>
            </section>

            // How It Works Section
            <section class="how-it-works" id="how-it-works">
                <div class="section-inner">
                    <h2 class="section-title animate-on-scroll">"How It Works"</h2>

                    <div class="steps">
                        <Step
                            index=0
                            number="1"
                            title="Describe"
                            description="Tell Survade what you want to learn from your patients, in plain language."
                        />
                        <Step
                            index=1
                            number="2"
                            title="Send"
                            description="Review the drafted survey and send it to a visit list with one click."
                        />
                        <Step
                            index=2
                            number="3"
                            title="Understand"
                            description="Watch summaries and trends build as responses come in."
                        />
                    </div>
                </div>
            </section>

            // Testimonials Section
            <section class="testimonials" id="testimonials">
                <div class="section-inner">
                    <h2 class="section-title animate-on-scroll">"From Our Pilot Clinics"</h2>

                    <div class="testimonials-grid">
                        <TestimonialCard
                            index=0
                            quote="We went from a 9% response rate on paper forms to 61% in the first month."
                            name="Dr. Priya Raman"
                            role="Family Medicine, Austin"
                        />
                        <TestimonialCard
                            index=1
                            quote="The follow-up questions surface things patients never tell us at the front desk."
                            name="Dr. Marcus Webb"
                            role="Pediatrics, Portland"
                        />
                        <TestimonialCard
                            index=2
                            quote="I read one summary over coffee instead of three hundred free-text answers."
                            name="Dr. Elena Sokolova"
                            role="Dermatology, Chicago"
                        />
                    </div>
                </div>
            </section>

            // Waitlist Section
            <section class="waitlist" id="waitlist">
                <div class="section-inner">
                    <h2 class="section-title animate-on-scroll">"Get Early Access"</h2>
                    <p class="section-subtitle animate-on-scroll">
                        "We're onboarding practices specialty by specialty. Save your spot."
                    </p>
                    <WaitlistForm />
                </div>
            </section>

            // Footer
            <Footer />

            // CSS Animations
            <LandingStyles />

            // Intersection Observer for scroll animations
            <ScrollAnimationScript />
        </div>
    }
}

/// Fixed navbar with in-page navigation and a scroll-dependent shadow
#[component]
fn Navbar(scroll_y: ReadSignal<f64>) -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    view! {
        <nav class="navbar" class:scrolled=move || navbar_elevated(scroll_y.get())>
            <div class="navbar-inner">
                <a
                    href="#hero"
                    class="navbar-logo"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_section("hero");
                    }
                >
                    "Survade"
                </a>

                // Desktop navigation
                <div class="navbar-links">
                    <NavLink label="Features" target="features" />
                    <NavLink label="How It Works" target="how-it-works" />
                    <NavLink label="Testimonials" target="testimonials" />
                    <CtaButton class="navbar-cta" on_press=move |_| scroll_to_section("waitlist")>
                        "Join Waitlist"
                    </CtaButton>
                </div>

                // Mobile menu button
                <button
                    class="navbar-menu-toggle"
                    on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || mobile_menu_open.get()
                >
                    {move || {
                        if mobile_menu_open.get() {
                            view! { <CloseIcon /> }.into_any()
                        } else {
                            view! { <MenuIcon /> }.into_any()
                        }
                    }}
                </button>
            </div>

            // Mobile menu
            <div class="navbar-mobile" class:open=move || mobile_menu_open.get()>
                <NavLink label="Features" target="features" on_navigate=move || set_mobile_menu_open.set(false) />
                <NavLink label="How It Works" target="how-it-works" on_navigate=move || set_mobile_menu_open.set(false) />
                <NavLink label="Testimonials" target="testimonials" on_navigate=move || set_mobile_menu_open.set(false) />
                <NavLink label="Join Waitlist" target="waitlist" on_navigate=move || set_mobile_menu_open.set(false) />
            </div>
        </nav>
    }
}

/// In-page anchor that scrolls smoothly instead of jumping
#[component]
fn NavLink(
    label: &'static str,
    target: &'static str,
    #[prop(optional, into)] on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <a
            href=format!("#{target}")
            class="navbar-link"
            on:click=move |ev| {
                ev.prevent_default();
                scroll_to_section(target);
                if let Some(callback) = on_navigate.as_ref() {
                    callback.run(());
                }
            }
        >
            {label}
        </a>
    }
}

/// Hamburger icon for the mobile menu toggle
#[component]
fn MenuIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" d="M4 6h16M4 12h16M4 18h16" />
        </svg>
    }
}

/// Close icon for the open mobile menu
#[component]
fn CloseIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" d="M6 18L18 6M6 6l12 12" />
        </svg>
    }
}

/// Feature card component
#[component]
fn FeatureCard(
    index: u32,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div
            class="feature-card animate-on-scroll"
            style:transition-delay=format!("{}ms", stagger_delay_ms(index))
        >
            <div class="feature-icon" aria-hidden="true">{icon}</div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-copy">{description}</p>
        </div>
    }
}

/// Numbered how-it-works step
#[component]
fn Step(
    index: u32,
    number: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div
            class="step animate-on-scroll"
            style:transition-delay=format!("{}ms", stagger_delay_ms(index))
        >
            <div class="step-number" aria-hidden="true">{number}</div>
            <h3 class="step-title">{title}</h3>
            <p class="step-copy">{description}</p>
        </div>
    }
}

/// Testimonial card component
#[component]
fn TestimonialCard(
    index: u32,
    quote: &'static str,
    name: &'static str,
    role: &'static str,
) -> impl IntoView {
    view! {
        <figure
            class="testimonial-card animate-on-scroll"
            style:transition-delay=format!("{}ms", stagger_delay_ms(index))
        >
            <blockquote class="testimonial-quote">{quote}</blockquote>
            <figcaption class="testimonial-author">
                <span class="testimonial-name">{name}</span>
                <span class="testimonial-role">{role}</span>
            </figcaption>
        </figure>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        // Page title
        <Title text="Survade - Patient Surveys, Reimagined" />

        // Basic meta tags
        <Meta name="description" content="Survade drafts, sends, and analyzes patient surveys for your practice with AI. Join the waitlist for early access." />
        <Meta name="keywords" content="patient surveys, patient feedback, medical practice, AI surveys, healthcare, clinic feedback" />

        // Open Graph / Facebook
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content="https://survade.health/" />
        <Meta property="og:title" content="Survade - Patient Surveys, Reimagined" />
        <Meta property="og:description" content="AI-assisted patient surveys for modern practices. Drafted, sent, and analyzed for you." />
        <Meta property="og:image" content="https://survade.health/og-image.png" />

        // Twitter
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:url" content="https://survade.health/" />
        <Meta property="twitter:title" content="Survade - Patient Surveys, Reimagined" />
        <Meta property="twitter:description" content="AI-assisted patient surveys for modern practices. Drafted, sent, and analyzed for you." />
        <Meta property="twitter:image" content="https://survade.health/og-image.png" />

        // Canonical URL
        <Link rel="canonical" href="https://survade.health/" />

        // JSON-LD Structured Data (inline script)
        <script type="application/ld+json" inner_html=r#"{"@context":"https://schema.org","@type":"SoftwareApplication","name":"Survade","applicationCategory":"MedicalApplication","operatingSystem":"Web","description":"AI-assisted patient survey platform for medical practices","url":"https://survade.health","author":{"@type":"Organization","name":"Survade"},"offers":{"@type":"Offer","price":"0","priceCurrency":"USD"}}"#></script>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <span class="footer-logo">"Survade"</span>
                    <p class="footer-copy">
                        "AI-assisted patient surveys for practices that listen."
                    </p>
                </div>

                <div class="footer-links">
                    <a
                        href="#features"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_section("features");
                        }
                    >
                        "Features"
                    </a>
                    <a
                        href="#waitlist"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_section("waitlist");
                        }
                    >
                        "Waitlist"
                    </a>
                    <a href="mailto:hello@survade.health">"Contact"</a>
                </div>
            </div>

            <div class="footer-bottom">
                <span>"© 2026 Survade. All rights reserved."</span>
            </div>
        </footer>
    }
}

/// Downward chevron for the hero scroll indicator
#[component]
fn ChevronDownIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" d="M19 9l-7 7-7-7" />
        </svg>
    }
}

/// CSS for the landing page animations
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            /* Scroll reveal */
            .animate-on-scroll {
                opacity: 0;
                transform: translateY(24px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }
            .animate-on-scroll.visible {
                opacity: 1;
                transform: translateY(0);
            }

            /* CTA ripple */
            @keyframes ripple {
                from {
                    transform: translate(-50%, -50%) scale(0);
                    opacity: 0.6;
                }
                to {
                    transform: translate(-50%, -50%) scale(20);
                    opacity: 0;
                }
            }
            /* Hero scroll indicator */
            @keyframes indicator-bounce {
                0%, 100% { transform: translate(-50%, 0); }
                50% { transform: translate(-50%, 10px); }
            }
            .scroll-indicator {
                position: absolute;
                bottom: 2rem;
                left: 50%;
                width: 2rem;
                height: 2rem;
                color: rgba(255, 255, 255, 0.7);
                animation: indicator-bounce 2s ease-in-out infinite;
            }

            /* Submit button spinner */
            @keyframes spinner-rotate {
                to { transform: rotate(360deg); }
            }
            .spinner {
                width: 1.25em;
                height: 1.25em;
                animation: spinner-rotate 1s linear infinite;
            }
            .spinner-track {
                opacity: 0.25;
            }
            .spinner-head {
                opacity: 0.75;
            }
            "#
        </style>
    }
}

/// Script for scroll-triggered animations using IntersectionObserver
#[component]
fn ScrollAnimationScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initScrollAnimations() {
                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                                observer.unobserve(entry.target);
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    document.querySelectorAll('.animate-on-scroll').forEach(el => {
                        observer.observe(el);
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initScrollAnimations);
                } else {
                    initScrollAnimations();
                }
            })();
            "#
        </script>
    }
}
