//! Non-PHP theme files: stylesheets, script, readme and sample content.

pub(super) const STYLE_CSS: &str = r##"/*
Theme Name: {{ theme_name | css_comment }}
Theme URI: https://example.com/{{ text_domain | css_comment }}
Author: {{ author | css_comment }}
Author URI: {{ author_uri | css_comment }}
Description: {{ description | css_comment }}
Version: {{ version | css_comment }}
License: GNU General Public License v2 or later
License URI: http://www.gnu.org/licenses/gpl-2.0.html
Text Domain: {{ text_domain | css_comment }}
Tags: custom-background, custom-logo, custom-menu, featured-images, threaded-comments, translation-ready, responsive-layout, {{ category | css_comment }}

This theme, like WordPress, is licensed under the GPL.
*/

/* Normalize & Reset */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  line-height: 1.6;
  color: #333;
}

a {
  text-decoration: none;
  color: inherit;
}

img {
  max-width: 100%;
  height: auto;
}

/* WordPress Core */
.alignnone {
  margin: 5px 20px 20px 0;
}

.aligncenter,
div.aligncenter {
  display: block;
  margin: 5px auto;
}

.alignright {
  float: right;
  margin: 5px 0 20px 20px;
}

.alignleft {
  float: left;
  margin: 5px 20px 20px 0;
}

.wp-caption {
  max-width: 100%;
}

.wp-caption-text {
  text-align: center;
  font-size: 0.9em;
  color: #666;
}

.sticky {
  background: #f9f9f9;
}

.gallery-caption {
  display: block;
}

.bypostauthor {
  font-weight: bold;
}

/* Screen Reader Text */
.screen-reader-text {
  clip: rect(1px, 1px, 1px, 1px);
  position: absolute !important;
  height: 1px;
  width: 1px;
  overflow: hidden;
}

/* Loading */
#page {
  opacity: 0;
  animation: fadeIn 0.5s ease-in forwards;
}

@keyframes fadeIn {
  to {
    opacity: 1;
  }
}
"##;

pub(super) const CUSTOM_CSS: &str = r##"/* Custom Theme Styles */

:root {
  --primary-color: {{ primary | raw }};
  --secondary-color: {{ secondary | raw }};
  --accent-color: {{ accent | raw }};
  --text-color: {{ text | raw }};
  --background-color: {{ background | raw }};
}

/* Layout */
.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 20px;
}

/* Header */
.site-header {
  background: var(--background-color);
  border-bottom: 1px solid #e5e5e5;
  padding: 20px 0;
}

.site-header .container {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.site-title a {
  color: var(--primary-color);
  font-size: 28px;
  font-weight: bold;
}

/* Navigation */
.main-navigation ul {
  display: flex;
  list-style: none;
  gap: 30px;
}

.main-navigation a {
  color: var(--text-color);
  transition: color 0.3s;
}

.main-navigation a:hover,
.main-navigation .current-menu-item > a {
  color: var(--primary-color);
}

.menu-toggle {
  display: none;
  background: var(--primary-color);
  color: white;
  border: none;
  padding: 10px 20px;
  cursor: pointer;
  border-radius: 5px;
}

/* Content */
.site-main {
  padding: 60px 0;
}

.page-header {
  text-align: center;
  margin-bottom: 60px;
}

.page-title {
  font-size: 48px;
  color: var(--primary-color);
  margin-bottom: 20px;
}

.page-subtitle {
  font-size: 20px;
  color: #666;
}

/* Posts */
.posts-wrapper {
  display: grid;
  gap: 40px;
}

.entry-title {
  font-size: 32px;
  margin-bottom: 15px;
}

.entry-title a {
  color: var(--text-color);
  transition: color 0.3s;
}

.entry-title a:hover {
  color: var(--primary-color);
}

.entry-meta {
  color: #666;
  font-size: 14px;
  margin-bottom: 20px;
}

.entry-content {
  line-height: 1.8;
}

/* Buttons */
button,
.button,
input[type="submit"] {
  background: var(--primary-color);
  color: white;
  padding: 12px 30px;
  border: none;
  border-radius: 5px;
  cursor: pointer;
  transition: background 0.3s;
}

button:hover,
.button:hover,
input[type="submit"]:hover {
  background: var(--secondary-color);
}

/* Sidebar */
.widget-area {
  padding: 40px;
  background: #f9f9f9;
}

.widget {
  margin-bottom: 40px;
}

.widget-title {
  font-size: 20px;
  margin-bottom: 20px;
  color: var(--primary-color);
}

/* Footer */
.site-footer {
  background: #1a1a1a;
  color: white;
  padding: 60px 0 20px;
  margin-top: 60px;
}

.footer-widgets {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 40px;
  margin-bottom: 40px;
}

.site-info {
  text-align: center;
  padding-top: 40px;
  border-top: 1px solid #333;
  opacity: 0.7;
}

/* Responsive */
@media (max-width: 768px) {
  .menu-toggle {
    display: block;
  }

  .main-navigation ul {
    display: none;
    flex-direction: column;
  }

  .main-navigation.toggled ul {
    display: flex;
  }

  .footer-widgets {
    grid-template-columns: 1fr;
  }

  .page-title {
    font-size: 32px;
  }
}
"##;

pub(super) const SCRIPT_JS: &str = r##"(function ($) {
  'use strict';

  // Mobile menu toggle
  $('.menu-toggle').on('click', function () {
    $('.main-navigation').toggleClass('toggled');
    $(this).attr('aria-expanded', $('.main-navigation').hasClass('toggled'));
  });

  // Smooth scroll for same-page anchors
  $('a[href*="#"]:not([href="#"])').on('click', function () {
    if (location.pathname.replace(/^\//, '') === this.pathname.replace(/^\//, '') &&
        location.hostname === this.hostname) {
      var target = $(this.hash);
      target = target.length ? target : $('[name=' + this.hash.slice(1) + ']');
      if (target.length) {
        $('html, body').animate({
          scrollTop: target.offset().top - 100
        }, 1000);
        return false;
      }
    }
  });

  // Mark the current menu item
  var currentUrl = window.location.href;
  $('.main-navigation a').each(function () {
    if (this.href === currentUrl) {
      $(this).parent().addClass('current-menu-item');
    }
  });

})(jQuery);
"##;

pub(super) const README_MD: &str = r##"# {{ theme_name | md }}

{{ description | md }}

## Description

A modern, responsive WordPress theme designed for {{ company_name | md }}.

## Installation

1. Upload the theme folder to /wp-content/themes/
2. Activate the theme through the 'Themes' menu in WordPress
3. Configure the theme via Appearance > Customize
4. Optionally import `sample-content.xml` via Tools > Import > WordPress

Activating the theme creates About, Services, Contact, Portfolio, Pricing
and Team pages and sets a static front page.

## Features

- Responsive design
- Custom logo support
- Custom menus
- Widget areas
- Custom header
- Custom background
- Post thumbnails
- Translation ready (text domain: {{ text_domain | md }})
- SEO optimized

## Requirements

- WordPress 5.0 or higher
- PHP 7.4 or higher

## Support

For support, please visit {{ author_uri | md }}

## License

This theme is licensed under the GPL v2 or later.

## Credits

Generated by {{ author | md }} - Professional Website Generator
"##;

pub(super) const SAMPLE_CONTENT_XML: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<!-- WordPress eXtended RSS file with sample content. Import via Tools > Import > WordPress. -->
<rss version="2.0"
  xmlns:content="http://purl.org/rss/1.0/modules/content/"
  xmlns:wp="http://wordpress.org/export/1.2/">
  <channel>
    <title>{{ company_name | xml }}</title>
    <description>{{ description | xml }}</description>
    <wp:wxr_version>1.2</wp:wxr_version>
    <item>
      <title>Welcome to {{ company_name | xml }}</title>
      <category domain="category" nicename="{{ category | xml }}"><![CDATA[{{ category | cdata }}]]></category>
      <content:encoded><![CDATA[
        <p>{{ subtitle_html | cdata }}</p>
        <p>We are excited to have you here. Explore our services and discover how we can help you achieve your goals.</p>
      ]]></content:encoded>
      <wp:post_type>post</wp:post_type>
      <wp:status>publish</wp:status>
    </item>
  </channel>
</rss>
"##;
