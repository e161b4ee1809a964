//! Built-in component templates

pub const NAVBAR: &str = "navbar";
pub const FOOTER: &str = "footer";
pub const NEWSLETTER_SIGNUP: &str = "newsletter_signup";
pub const PRODUCT_CARD: &str = "product_card";

/// Endpoint the newsletter form posts to
pub const NEWSLETTER_ENDPOINT: &str = "/newsletter/signup";

const NAVBAR_TEMPLATE: &str = r#"<nav class="navbar">
  <ul class="nav-links">
    {{ links }}
  </ul>
</nav>"#;

const FOOTER_TEMPLATE: &str = r#"<footer class="footer">
  <div class="footer-content">
    {{ logo }}
    {{ social }}
    {% if links %}<ul class="footer-links">
      {{ links }}
    </ul>{% endif %}
    {{ rights }}
  </div>
  {% if newsletter %}<div class="footer-newsletter">
    {{ signup }}
  </div>{% endif %}
</footer>"#;

const NEWSLETTER_SIGNUP_TEMPLATE: &str = r#"{{ title }}
<div class="border"></div>
{{ description }}
<form action="/newsletter/signup" method="POST" class="newsletter-form">
  <input type="email" name="email" id="email" class="txtb" placeholder="Enter your email">
  <input type="submit" value="Sign up" class="btn">
</form>"#;

const PRODUCT_CARD_TEMPLATE: &str = r##"<div class="product-card">
  {{ header }}
  <div class="product-img"></div>
  {{ variants }}
  <div class="product-info">
    {{ footer }}
    <a href="#" class="product-button">Add to Cart</a>
  </div>
</div>"##;

/// Name and source of every built-in template
pub const BUILTIN_TEMPLATES: [(&str, &str); 4] = [
    (NAVBAR, NAVBAR_TEMPLATE),
    (FOOTER, FOOTER_TEMPLATE),
    (NEWSLETTER_SIGNUP, NEWSLETTER_SIGNUP_TEMPLATE),
    (PRODUCT_CARD, PRODUCT_CARD_TEMPLATE),
];
