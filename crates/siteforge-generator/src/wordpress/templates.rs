//! PHP template files of the theme.
//!
//! Function names and constants use the theme prefix, which only ever
//! contains `[a-z0-9_]`, so it is inserted raw. Every other value goes
//! through the filter of the context it lands in.

pub(super) const INDEX_PHP: &str = r##"<?php
/**
 * The main template file
 *
 * @package {{ package | raw }}
 */

get_header();
?>

<main id="primary" class="site-main">
  <div class="container">
    <?php if ( have_posts() ) : ?>

      <header class="page-header">
        <?php if ( is_home() && ! is_front_page() ) : ?>
          <h1 class="page-title"><?php single_post_title(); ?></h1>
        <?php else : ?>
          <h1 class="page-title"><?php echo esc_html__( '{{ title | php_sq }}', '{{ text_domain | php_sq }}' ); ?></h1>
          <p class="page-subtitle"><?php echo esc_html__( '{{ subtitle | php_sq }}', '{{ text_domain | php_sq }}' ); ?></p>
        <?php endif; ?>
      </header>

      <div class="posts-wrapper">
        <?php
        while ( have_posts() ) :
          the_post();
          get_template_part( 'template-parts/content', get_post_type() );
        endwhile;

        the_posts_navigation();
        ?>
      </div>

    <?php else : ?>
      <p><?php esc_html_e( 'No posts found.', '{{ text_domain | php_sq }}' ); ?></p>
    <?php endif; ?>
  </div>
</main>

<?php
get_sidebar();
get_footer();
"##;

pub(super) const HEADER_PHP: &str = r##"<?php
/**
 * The header for our theme
 *
 * @package {{ package | raw }}
 */
?>
<!doctype html>
<html <?php language_attributes(); ?>>
<head>
  <meta charset="<?php bloginfo( 'charset' ); ?>">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <link rel="profile" href="https://gmpg.org/xfn/11">
  <?php wp_head(); ?>
</head>

<body <?php body_class(); ?>>
<?php wp_body_open(); ?>
<div id="page" class="site">
  <a class="skip-link screen-reader-text" href="#primary"><?php esc_html_e( 'Skip to content', '{{ text_domain | php_sq }}' ); ?></a>

  <header id="masthead" class="site-header">
    <div class="container">
      <div class="site-branding">
        <?php
        if ( has_custom_logo() ) :
          the_custom_logo();
        else :
        ?>
          <h1 class="site-title">
            <a href="<?php echo esc_url( home_url( '/' ) ); ?>" rel="home">
              <?php bloginfo( 'name' ); ?>
            </a>
          </h1>
          <?php
          $description = get_bloginfo( 'description', 'display' );
          if ( $description || is_customize_preview() ) :
          ?>
            <p class="site-description"><?php echo esc_html( $description ); ?></p>
          <?php endif; ?>
        <?php endif; ?>
      </div>

      <nav id="site-navigation" class="main-navigation">
        <button class="menu-toggle" aria-controls="primary-menu" aria-expanded="false">
          <span class="menu-icon"></span>
          <?php esc_html_e( 'Menu', '{{ text_domain | php_sq }}' ); ?>
        </button>
        <?php
        wp_nav_menu(
          array(
            'theme_location' => 'primary',
            'menu_id'        => 'primary-menu',
            'fallback_cb'    => false,
          )
        );
        ?>
      </nav>
    </div>
  </header>
"##;

pub(super) const FOOTER_PHP: &str = r##"<?php
/**
 * The template for displaying the footer
 *
 * @package {{ package | raw }}
 */
?>

  <footer id="colophon" class="site-footer">
    <div class="container">
      <div class="footer-widgets">
        <?php for ( $i = 1; $i <= 3; $i++ ) : ?>
          <?php if ( is_active_sidebar( 'footer-' . $i ) ) : ?>
            <div class="footer-widget-area">
              <?php dynamic_sidebar( 'footer-' . $i ); ?>
            </div>
          <?php endif; ?>
        <?php endfor; ?>
      </div>

      <div class="site-info">
        <p>&copy; <?php echo esc_html( gmdate( 'Y' ) ); ?> <?php bloginfo( 'name' ); ?>. <?php esc_html_e( 'All rights reserved.', '{{ text_domain | php_sq }}' ); ?></p>
        <p>
          <?php
          printf( esc_html__( 'Powered by %s', '{{ text_domain | php_sq }}' ), '<a href="https://wordpress.org/">WordPress</a>' );
          ?>
        </p>
      </div>
    </div>
  </footer>
</div>

<?php wp_footer(); ?>
</body>
</html>
"##;

pub(super) const FUNCTIONS_PHP: &str = r##"<?php
/**
 * Theme functions and definitions
 *
 * @package {{ package | raw }}
 */

if ( ! defined( 'ABSPATH' ) ) {
  exit;
}

define( '{{ const_prefix | raw }}_VERSION', '{{ version | php_sq }}' );

/**
 * Sets up theme defaults and registers support for various WordPress features.
 */
function {{ prefix | raw }}_setup() {
  load_theme_textdomain( '{{ text_domain | php_sq }}', get_template_directory() . '/languages' );

  add_theme_support( 'automatic-feed-links' );
  add_theme_support( 'title-tag' );
  add_theme_support( 'post-thumbnails' );
  add_theme_support( 'html5', array( 'search-form', 'comment-form', 'comment-list', 'gallery', 'caption', 'style', 'script' ) );
  add_theme_support( 'customize-selective-refresh-widgets' );
  add_theme_support( 'custom-logo', array( 'height' => 250, 'width' => 250, 'flex-width' => true, 'flex-height' => true ) );
  add_theme_support( 'custom-background', array( 'default-color' => 'ffffff' ) );
  add_theme_support( 'align-wide' );
  add_theme_support( 'responsive-embeds' );

  register_nav_menus( array(
    'primary' => esc_html__( 'Primary Menu', '{{ text_domain | php_sq }}' ),
    'footer'  => esc_html__( 'Footer Menu', '{{ text_domain | php_sq }}' ),
  ) );
}
add_action( 'after_setup_theme', '{{ prefix | raw }}_setup' );

/**
 * Set the content width in pixels.
 */
function {{ prefix | raw }}_content_width() {
  $GLOBALS['content_width'] = apply_filters( '{{ prefix | raw }}_content_width', 1200 );
}
add_action( 'after_setup_theme', '{{ prefix | raw }}_content_width', 0 );

/**
 * Register widget areas.
 */
function {{ prefix | raw }}_widgets_init() {
  register_sidebar( array(
    'name'          => esc_html__( 'Sidebar', '{{ text_domain | php_sq }}' ),
    'id'            => 'sidebar-1',
    'description'   => esc_html__( 'Add widgets here.', '{{ text_domain | php_sq }}' ),
    'before_widget' => '<section id="%1$s" class="widget %2$s">',
    'after_widget'  => '</section>',
    'before_title'  => '<h2 class="widget-title">',
    'after_title'   => '</h2>',
  ) );

  for ( $i = 1; $i <= 3; $i++ ) {
    register_sidebar( array(
      /* translators: %d: footer widget area number */
      'name'          => sprintf( esc_html__( 'Footer %d', '{{ text_domain | php_sq }}' ), $i ),
      'id'            => 'footer-' . $i,
      'description'   => esc_html__( 'Add widgets here.', '{{ text_domain | php_sq }}' ),
      'before_widget' => '<section id="%1$s" class="widget %2$s">',
      'after_widget'  => '</section>',
      'before_title'  => '<h2 class="widget-title">',
      'after_title'   => '</h2>',
    ) );
  }
}
add_action( 'widgets_init', '{{ prefix | raw }}_widgets_init' );

/**
 * Enqueue scripts and styles.
 */
function {{ prefix | raw }}_scripts() {
  wp_enqueue_style( '{{ text_domain | php_sq }}-style', get_stylesheet_uri(), array(), {{ const_prefix | raw }}_VERSION );
  wp_enqueue_style( '{{ text_domain | php_sq }}-custom', get_template_directory_uri() . '/assets/css/custom.css', array(), {{ const_prefix | raw }}_VERSION );

  wp_enqueue_script( '{{ text_domain | php_sq }}-script', get_template_directory_uri() . '/assets/js/script.js', array( 'jquery' ), {{ const_prefix | raw }}_VERSION, true );

  if ( is_singular() && comments_open() && get_option( 'thread_comments' ) ) {
    wp_enqueue_script( 'comment-reply' );
  }
}
add_action( 'wp_enqueue_scripts', '{{ prefix | raw }}_scripts' );

/**
 * Custom header support.
 */
require get_template_directory() . '/inc/custom-header.php';

/**
 * Custom template tags for this theme.
 */
require get_template_directory() . '/inc/template-functions.php';

/**
 * Customizer additions.
 */
require get_template_directory() . '/inc/customizer.php';

/**
 * Sample pages created on theme activation.
 */
require get_template_directory() . '/inc/sample-data.php';
"##;

pub(super) const PAGE_PHP: &str = r##"<?php
/**
 * The template for displaying all pages
 *
 * @package {{ package | raw }}
 */

get_header();
?>

<main id="primary" class="site-main">
  <div class="container">
    <?php
    while ( have_posts() ) :
      the_post();
      get_template_part( 'template-parts/content', 'page' );

      if ( comments_open() || get_comments_number() ) :
        comments_template();
      endif;
    endwhile;
    ?>
  </div>
</main>

<?php
get_footer();
"##;

pub(super) const SINGLE_PHP: &str = r##"<?php
/**
 * The template for displaying all single posts
 *
 * @package {{ package | raw }}
 */

get_header();
?>

<main id="primary" class="site-main">
  <div class="container">
    <?php
    while ( have_posts() ) :
      the_post();
      get_template_part( 'template-parts/content', get_post_type() );

      the_post_navigation(
        array(
          'prev_text' => '<span class="nav-subtitle">' . esc_html__( 'Previous:', '{{ text_domain | php_sq }}' ) . '</span> <span class="nav-title">%title</span>',
          'next_text' => '<span class="nav-subtitle">' . esc_html__( 'Next:', '{{ text_domain | php_sq }}' ) . '</span> <span class="nav-title">%title</span>',
        )
      );

      if ( comments_open() || get_comments_number() ) :
        comments_template();
      endif;
    endwhile;
    ?>
  </div>
</main>

<?php
get_sidebar();
get_footer();
"##;

pub(super) const SIDEBAR_PHP: &str = r##"<?php
/**
 * The sidebar containing the main widget area
 *
 * @package {{ package | raw }}
 */

if ( ! is_active_sidebar( 'sidebar-1' ) ) {
  return;
}
?>

<aside id="secondary" class="widget-area">
  <?php dynamic_sidebar( 'sidebar-1' ); ?>
</aside>
"##;

pub(super) const SEARCHFORM_PHP: &str = r##"<form role="search" method="get" class="search-form" action="<?php echo esc_url( home_url( '/' ) ); ?>">
  <label>
    <span class="screen-reader-text"><?php echo esc_html_x( 'Search for:', 'label', '{{ text_domain | php_sq }}' ); ?></span>
    <input type="search" class="search-field" placeholder="<?php echo esc_attr_x( 'Search &hellip;', 'placeholder', '{{ text_domain | php_sq }}' ); ?>" value="<?php echo esc_attr( get_search_query() ); ?>" name="s" />
  </label>
  <button type="submit" class="search-submit"><?php echo esc_html_x( 'Search', 'submit button', '{{ text_domain | php_sq }}' ); ?></button>
</form>
"##;

pub(super) const COMMENTS_PHP: &str = r##"<?php
/**
 * The template for displaying comments
 *
 * @package {{ package | raw }}
 */

if ( post_password_required() ) {
  return;
}
?>

<div id="comments" class="comments-area">
  <?php if ( have_comments() ) : ?>
    <h2 class="comments-title">
      <?php
      $comment_count = get_comments_number();
      if ( '1' === $comment_count ) {
        esc_html_e( 'One comment', '{{ text_domain | php_sq }}' );
      } else {
        /* translators: %1$s: comment count */
        printf( esc_html( _n( '%1$s comment', '%1$s comments', $comment_count, '{{ text_domain | php_sq }}' ) ), esc_html( number_format_i18n( $comment_count ) ) );
      }
      ?>
    </h2>

    <ol class="comment-list">
      <?php
      wp_list_comments( array(
        'style'      => 'ol',
        'short_ping' => true,
      ) );
      ?>
    </ol>

    <?php the_comments_navigation(); ?>

  <?php endif; ?>

  <?php comment_form(); ?>
</div>
"##;

pub(super) const NOT_FOUND_PHP: &str = r##"<?php
/**
 * The template for displaying 404 pages (not found)
 *
 * @package {{ package | raw }}
 */

get_header();
?>

<main id="primary" class="site-main">
  <div class="container">
    <section class="error-404 not-found">
      <header class="page-header">
        <h1 class="page-title"><?php esc_html_e( 'Oops! That page can&rsquo;t be found.', '{{ text_domain | php_sq }}' ); ?></h1>
      </header>

      <div class="page-content">
        <p><?php esc_html_e( 'It looks like nothing was found at this location. Maybe try a search?', '{{ text_domain | php_sq }}' ); ?></p>
        <p><a href="<?php echo esc_url( home_url( '/' ) ); ?>"><?php echo esc_html__( 'Back to {{ company_name | php_sq }}', '{{ text_domain | php_sq }}' ); ?></a></p>
        <?php get_search_form(); ?>
      </div>
    </section>
  </div>
</main>

<?php
get_footer();
"##;

pub(super) const FRONT_PAGE_PHP: &str = r##"<?php
/**
 * Template Name: Front Page
 * The template for displaying the home page
 *
 * @package {{ package | raw }}
 */

get_header();
?>

<main id="primary" class="site-main front-page">
  <section class="hero-section" style="background: linear-gradient(135deg, {{ primary | attr }}, {{ secondary | attr }}); padding: 120px 20px; text-align: center; color: white;">
    <div class="container">
      <h1 class="hero-title" style="font-size: 56px; font-weight: bold; margin-bottom: 20px;"><?php echo esc_html( get_theme_mod( 'hero_title', '{{ title | php_sq }}' ) ); ?></h1>
      <p class="hero-subtitle" style="font-size: 24px; margin-bottom: 40px; opacity: 0.9;"><?php echo esc_html( get_theme_mod( 'hero_subtitle', '{{ subtitle | php_sq }}' ) ); ?></p>
      <a href="#services" class="cta-button" style="display: inline-block; background: white; color: {{ primary | attr }}; padding: 15px 40px; border-radius: 8px; font-weight: bold; text-decoration: none;"><?php esc_html_e( 'Get Started', '{{ text_domain | php_sq }}' ); ?></a>
    </div>
  </section>

  <section id="services" class="features-section" style="padding: 80px 20px;">
    <div class="container">
      <h2 style="text-align: center; font-size: 42px; margin-bottom: 60px; color: {{ primary | attr }};"><?php esc_html_e( 'Our Services', '{{ text_domain | php_sq }}' ); ?></h2>
      <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 40px;">
        <?php
        $services = array(
          array( 'title' => 'Service 1', 'description' => 'Comprehensive solution for your needs' ),
          array( 'title' => 'Service 2', 'description' => 'Expert guidance and support' ),
          array( 'title' => 'Service 3', 'description' => 'Cutting-edge technology' ),
        );
        foreach ( $services as $index => $service ) :
        ?>
          <div style="background: white; padding: 40px; border-radius: 12px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); text-align: center;">
            <div style="width: 80px; height: 80px; margin: 0 auto 20px; background: {{ primary | attr }}; border-radius: 50%; display: flex; align-items: center; justify-content: center; color: white; font-size: 32px; font-weight: bold;">
              <?php echo esc_html( $index + 1 ); ?>
            </div>
            <h3 style="font-size: 24px; margin-bottom: 15px;"><?php echo esc_html( $service['title'] ); ?></h3>
            <p style="color: #666;"><?php echo esc_html( $service['description'] ); ?></p>
          </div>
        <?php endforeach; ?>
      </div>
    </div>
  </section>

  <section style="background: {{ primary | attr }}; color: white; padding: 80px 20px; text-align: center;">
    <div class="container">
      <h2 style="font-size: 36px; margin-bottom: 20px;"><?php esc_html_e( 'Ready to Get Started?', '{{ text_domain | php_sq }}' ); ?></h2>
      <p style="font-size: 20px; margin-bottom: 30px; opacity: 0.9;"><?php esc_html_e( 'Contact us today for a consultation', '{{ text_domain | php_sq }}' ); ?></p>
      <a href="<?php echo esc_url( home_url( '/contact' ) ); ?>" style="display: inline-block; background: white; color: {{ primary | attr }}; padding: 15px 40px; border-radius: 8px; font-weight: bold; text-decoration: none;"><?php esc_html_e( 'Contact Us', '{{ text_domain | php_sq }}' ); ?></a>
    </div>
  </section>
</main>

<?php
get_footer();
"##;

pub(super) const PAGE_ABOUT_PHP: &str = r##"<?php
/**
 * Template Name: About Page
 *
 * @package {{ package | raw }}
 */

get_header();
?>

<main id="primary" class="site-main about-page">
  <section style="padding: 80px 20px;">
    <div class="container" style="max-width: 1200px; margin: 0 auto;">
      <h1 style="font-size: 48px; margin-bottom: 30px; color: {{ primary | attr }};">About {{ company_name }}</h1>

      <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 60px; margin-bottom: 80px;">
        <div>
          <h2 style="font-size: 32px; margin-bottom: 20px;">Our Story</h2>
          <p style="font-size: 18px; line-height: 1.8; color: #666; margin-bottom: 20px;">
            {{ company_name }} was founded with a vision to provide exceptional services to our clients.
            We are committed to excellence and innovation in everything we do.
          </p>
          <p style="font-size: 18px; line-height: 1.8; color: #666;">
            Our team of dedicated professionals works tirelessly to ensure that every project exceeds expectations.
          </p>
        </div>
        <div style="background: {{ primary | attr }}; border-radius: 12px; min-height: 400px;"></div>
      </div>

      <h2 style="font-size: 36px; text-align: center; margin-bottom: 60px;">Our Values</h2>
      <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: 40px;">
        <?php
        $values = array(
          array( 'title' => 'Excellence', 'description' => 'We strive for excellence in everything we do' ),
          array( 'title' => 'Innovation', 'description' => 'We embrace new technologies and methodologies' ),
          array( 'title' => 'Integrity', 'description' => 'We maintain the highest ethical standards' ),
          array( 'title' => 'Customer Focus', 'description' => 'Our clients\' success is our success' ),
        );
        foreach ( $values as $value ) :
        ?>
          <div style="text-align: center; padding: 30px;">
            <div style="width: 60px; height: 60px; margin: 0 auto 20px; background: {{ secondary | attr }}; border-radius: 50%;"></div>
            <h3 style="font-size: 22px; margin-bottom: 15px; color: {{ primary | attr }};"><?php echo esc_html( $value['title'] ); ?></h3>
            <p style="color: #666;"><?php echo esc_html( $value['description'] ); ?></p>
          </div>
        <?php endforeach; ?>
      </div>
    </div>
  </section>
</main>

<?php
get_footer();
"##;

pub(super) const PAGE_SERVICES_PHP: &str = r##"<?php
/**
 * Template Name: Services Page
 *
 * @package {{ package | raw }}
 */

get_header();
?>

<main id="primary" class="site-main services-page">
  <section style="padding: 80px 20px;">
    <div class="container" style="max-width: 1200px; margin: 0 auto;">
      <h1 style="font-size: 48px; text-align: center; margin-bottom: 20px; color: {{ primary | attr }};">Our Services</h1>
      <p style="font-size: 20px; text-align: center; color: #666; margin-bottom: 60px; max-width: 800px; margin-left: auto; margin-right: auto;">
        {{ description }}
      </p>

      <div style="display: grid; gap: 60px;">
        <?php
        $services = array(
          array( 'title' => 'Premium Service', 'description' => 'Comprehensive solution tailored to your needs', 'features' => array( 'Feature 1', 'Feature 2', 'Feature 3' ) ),
          array( 'title' => 'Consulting', 'description' => 'Expert guidance from industry professionals', 'features' => array( 'Strategy', 'Implementation', 'Support' ) ),
          array( 'title' => 'Ongoing Support', 'description' => '24/7 support to keep you running smoothly', 'features' => array( 'Monitoring', 'Maintenance', 'Updates' ) ),
        );
        foreach ( $services as $index => $service ) :
          $reverse = 0 !== $index % 2;
        ?>
          <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 40px; align-items: center;">
            <?php if ( ! $reverse ) : ?>
              <div style="background: linear-gradient(135deg, {{ primary | attr }}, {{ secondary | attr }}); border-radius: 12px; height: 300px;"></div>
            <?php endif; ?>
            <div>
              <h2 style="font-size: 32px; margin-bottom: 20px; color: {{ primary | attr }};"><?php echo esc_html( $service['title'] ); ?></h2>
              <p style="font-size: 18px; color: #666; margin-bottom: 30px;"><?php echo esc_html( $service['description'] ); ?></p>
              <ul style="list-style: none; padding: 0;">
                <?php foreach ( $service['features'] as $feature ) : ?>
                  <li style="padding: 10px 0; color: #333;">
                    <span style="color: {{ primary | attr }}; margin-right: 10px;">&#10003;</span>
                    <?php echo esc_html( $feature ); ?>
                  </li>
                <?php endforeach; ?>
              </ul>
            </div>
            <?php if ( $reverse ) : ?>
              <div style="background: linear-gradient(135deg, {{ primary | attr }}, {{ secondary | attr }}); border-radius: 12px; height: 300px;"></div>
            <?php endif; ?>
          </div>
        <?php endforeach; ?>
      </div>
    </div>
  </section>
</main>

<?php
get_footer();
"##;

pub(super) const PAGE_CONTACT_PHP: &str = r##"<?php
/**
 * Template Name: Contact Page
 *
 * @package {{ package | raw }}
 */

get_header();
?>

<main id="primary" class="site-main contact-page">
  <section style="padding: 80px 20px;">
    <div class="container" style="max-width: 1200px; margin: 0 auto;">
      <h1 style="font-size: 48px; text-align: center; margin-bottom: 20px; color: {{ primary | attr }};">Get In Touch</h1>
      <p style="font-size: 20px; text-align: center; color: #666; margin-bottom: 60px;">
        Have a question? We'd love to hear from you.
      </p>

      <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 60px;">
        <div>
          <h2 style="font-size: 28px; margin-bottom: 30px;">Contact Information</h2>

          <div style="margin-bottom: 30px;">
            <h3 style="font-size: 18px; color: {{ primary | attr }}; margin-bottom: 10px;">Address</h3>
            <p style="color: #666;">123 Business Street<br>City, State 12345</p>
          </div>

          <div style="margin-bottom: 30px;">
            <h3 style="font-size: 18px; color: {{ primary | attr }}; margin-bottom: 10px;">Email</h3>
            <p style="color: #666;"><a href="mailto:{{ contact_email | attr }}" style="color: {{ primary | attr }};">{{ contact_email }}</a></p>
          </div>

          <div style="margin-bottom: 30px;">
            <h3 style="font-size: 18px; color: {{ primary | attr }}; margin-bottom: 10px;">Phone</h3>
            <p style="color: #666;">{{ phone }}</p>
          </div>

          <div>
            <h3 style="font-size: 18px; color: {{ primary | attr }}; margin-bottom: 10px;">Hours</h3>
            <p style="color: #666;">Monday - Friday: 9am - 6pm<br>Saturday - Sunday: Closed</p>
          </div>
        </div>

        <div>
          <form method="post" action="<?php echo esc_url( admin_url( 'admin-post.php' ) ); ?>" style="background: #f9f9f9; padding: 40px; border-radius: 12px;">
            <div style="margin-bottom: 25px;">
              <label style="display: block; margin-bottom: 8px; font-weight: 600;">Name *</label>
              <input type="text" name="contact_name" required style="width: 100%; padding: 12px; border: 1px solid #ddd; border-radius: 6px; font-size: 16px;">
            </div>

            <div style="margin-bottom: 25px;">
              <label style="display: block; margin-bottom: 8px; font-weight: 600;">Email *</label>
              <input type="email" name="contact_email" required style="width: 100%; padding: 12px; border: 1px solid #ddd; border-radius: 6px; font-size: 16px;">
            </div>

            <div style="margin-bottom: 25px;">
              <label style="display: block; margin-bottom: 8px; font-weight: 600;">Subject *</label>
              <input type="text" name="contact_subject" required style="width: 100%; padding: 12px; border: 1px solid #ddd; border-radius: 6px; font-size: 16px;">
            </div>

            <div style="margin-bottom: 25px;">
              <label style="display: block; margin-bottom: 8px; font-weight: 600;">Message *</label>
              <textarea name="contact_message" required rows="5" style="width: 100%; padding: 12px; border: 1px solid #ddd; border-radius: 6px; font-size: 16px; resize: vertical;"></textarea>
            </div>

            <button type="submit" style="background: {{ primary | attr }}; color: white; padding: 15px 40px; border: none; border-radius: 6px; font-size: 16px; font-weight: bold; cursor: pointer; width: 100%;">Send Message</button>
          </form>
        </div>
      </div>
    </div>
  </section>
</main>

<?php
get_footer();
"##;

pub(super) const PAGE_PORTFOLIO_PHP: &str = r##"<?php
/**
 * Template Name: Portfolio Page
 *
 * @package {{ package | raw }}
 */

get_header();
?>

<main id="primary" class="site-main portfolio-page">
  <section style="padding: 80px 20px;">
    <div class="container" style="max-width: 1200px; margin: 0 auto;">
      <h1 style="font-size: 48px; text-align: center; margin-bottom: 20px; color: {{ primary | attr }};">Our Work</h1>
      <p style="font-size: 20px; text-align: center; color: #666; margin-bottom: 60px;">
        Explore our portfolio of successful projects
      </p>

      <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(350px, 1fr)); gap: 30px;">
        <?php for ( $i = 1; $i <= 6; $i++ ) : ?>
          <div style="border-radius: 12px; overflow: hidden; box-shadow: 0 4px 6px rgba(0,0,0,0.1); transition: transform 0.3s;">
            <div style="background: linear-gradient(135deg, {{ primary | attr }}, {{ secondary | attr }}); height: 250px; display: flex; align-items: center; justify-content: center; color: white; font-size: 48px; font-weight: bold;">
              <?php echo esc_html( $i ); ?>
            </div>
            <div style="padding: 25px; background: white;">
              <h3 style="font-size: 22px; margin-bottom: 10px;">Project <?php echo esc_html( $i ); ?></h3>
              <p style="color: #666; margin-bottom: 15px;">A showcase of our exceptional work and dedication to quality.</p>
              <a href="#" style="color: {{ primary | attr }}; font-weight: 600; text-decoration: none;">View Details &rarr;</a>
            </div>
          </div>
        <?php endfor; ?>
      </div>
    </div>
  </section>
</main>

<?php
get_footer();
"##;

pub(super) const PAGE_PRICING_PHP: &str = r##"<?php
/**
 * Template Name: Pricing Page
 *
 * @package {{ package | raw }}
 */

get_header();
?>

<main id="primary" class="site-main pricing-page">
  <section style="padding: 80px 20px;">
    <div class="container" style="max-width: 1200px; margin: 0 auto;">
      <h1 style="font-size: 48px; text-align: center; margin-bottom: 20px; color: {{ primary | attr }};">Pricing Plans</h1>
      <p style="font-size: 20px; text-align: center; color: #666; margin-bottom: 60px;">
        Choose the perfect plan for your needs
      </p>

      <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 30px;">
        <?php
        $primary_color = get_theme_mod( 'primary_color', '{{ primary | php_sq }}' );
        $plans = array(
          array( 'name' => 'Basic', 'price' => '49', 'features' => array( 'Feature 1', 'Feature 2', 'Feature 3', 'Email Support' ) ),
          array( 'name' => 'Professional', 'price' => '99', 'features' => array( 'Everything in Basic', 'Feature 4', 'Feature 5', 'Priority Support' ), 'popular' => true ),
          array( 'name' => 'Enterprise', 'price' => '199', 'features' => array( 'Everything in Pro', 'Feature 6', 'Feature 7', 'Dedicated Support' ) ),
        );
        foreach ( $plans as $plan ) :
          $is_popular = ! empty( $plan['popular'] );
        ?>
          <div style="background: white; border-radius: 12px; padding: 40px; text-align: center; box-shadow: 0 4px 6px rgba(0,0,0,0.1); <?php echo $is_popular ? esc_attr( 'border: 3px solid ' . $primary_color . ';' ) : ''; ?> position: relative;">
            <?php if ( $is_popular ) : ?>
              <div style="position: absolute; top: -15px; left: 50%; transform: translateX(-50%); background: {{ primary | attr }}; color: white; padding: 5px 20px; border-radius: 20px; font-size: 14px; font-weight: bold;">
                Most Popular
              </div>
            <?php endif; ?>
            <h3 style="font-size: 28px; margin-bottom: 20px;"><?php echo esc_html( $plan['name'] ); ?></h3>
            <div style="margin-bottom: 30px;">
              <span style="font-size: 48px; font-weight: bold; color: {{ primary | attr }};">$<?php echo esc_html( $plan['price'] ); ?></span>
              <span style="color: #666;">/month</span>
            </div>
            <ul style="list-style: none; padding: 0; margin-bottom: 30px;">
              <?php foreach ( $plan['features'] as $feature ) : ?>
                <li style="padding: 12px 0; border-bottom: 1px solid #eee;"><?php echo esc_html( $feature ); ?></li>
              <?php endforeach; ?>
            </ul>
            <a href="#" style="display: block; background: <?php echo esc_attr( $is_popular ? $primary_color : 'transparent' ); ?>; color: <?php echo esc_attr( $is_popular ? 'white' : $primary_color ); ?>; border: 2px solid {{ primary | attr }}; padding: 15px; border-radius: 8px; font-weight: bold; text-decoration: none;">
              Get Started
            </a>
          </div>
        <?php endforeach; ?>
      </div>
    </div>
  </section>
</main>

<?php
get_footer();
"##;

pub(super) const PAGE_TEAM_PHP: &str = r##"<?php
/**
 * Template Name: Team Page
 *
 * @package {{ package | raw }}
 */

get_header();
?>

<main id="primary" class="site-main team-page">
  <section style="padding: 80px 20px;">
    <div class="container" style="max-width: 1200px; margin: 0 auto;">
      <h1 style="font-size: 48px; text-align: center; margin-bottom: 20px; color: {{ primary | attr }};">Our Team</h1>
      <p style="font-size: 20px; text-align: center; color: #666; margin-bottom: 60px;">
        Meet the talented people behind {{ company_name }}
      </p>

      <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 40px;">
        <?php
        $team = array(
          array( 'name' => 'John Doe', 'position' => 'CEO & Founder' ),
          array( 'name' => 'Jane Smith', 'position' => 'Chief Technology Officer' ),
          array( 'name' => 'Mike Johnson', 'position' => 'Head of Design' ),
          array( 'name' => 'Sarah Williams', 'position' => 'Marketing Director' ),
        );
        foreach ( $team as $member ) :
        ?>
          <div style="text-align: center;">
            <div style="width: 200px; height: 200px; margin: 0 auto 20px; background: linear-gradient(135deg, {{ primary | attr }}, {{ secondary | attr }}); border-radius: 50%;"></div>
            <h3 style="font-size: 24px; margin-bottom: 10px; color: {{ primary | attr }};"><?php echo esc_html( $member['name'] ); ?></h3>
            <p style="color: #666; margin-bottom: 15px;"><?php echo esc_html( $member['position'] ); ?></p>
            <div style="display: flex; justify-content: center; gap: 15px;">
              <a href="#" style="color: {{ primary | attr }};">LinkedIn</a>
              <a href="#" style="color: {{ primary | attr }};">Twitter</a>
            </div>
          </div>
        <?php endforeach; ?>
      </div>
    </div>
  </section>
</main>

<?php
get_footer();
"##;

pub(super) const CONTENT_PHP: &str = r##"<?php
/**
 * Template part for displaying posts
 *
 * @package {{ package | raw }}
 */
?>

<article id="post-<?php the_ID(); ?>" <?php post_class(); ?>>
  <header class="entry-header">
    <?php
    if ( is_singular() ) :
      the_title( '<h1 class="entry-title">', '</h1>' );
    else :
      the_title( '<h2 class="entry-title"><a href="' . esc_url( get_permalink() ) . '" rel="bookmark">', '</a></h2>' );
    endif;
    ?>

    <div class="entry-meta">
      <?php {{ prefix | raw }}_posted_on(); ?> <?php {{ prefix | raw }}_posted_by(); ?>
    </div>
  </header>

  <?php if ( has_post_thumbnail() ) : ?>
    <div class="post-thumbnail">
      <?php the_post_thumbnail(); ?>
    </div>
  <?php endif; ?>

  <div class="entry-content">
    <?php
    the_content();
    wp_link_pages();
    ?>
  </div>

  <footer class="entry-footer">
    <?php
    $categories_list = get_the_category_list( ', ' );
    if ( $categories_list ) {
      /* translators: %s: list of categories */
      printf( '<span class="cat-links">' . esc_html__( 'Posted in %s', '{{ text_domain | php_sq }}' ) . '</span>', $categories_list );
    }

    $tags_list = get_the_tag_list( '', ', ' );
    if ( $tags_list ) {
      /* translators: %s: list of tags */
      printf( '<span class="tags-links">' . esc_html__( 'Tagged %s', '{{ text_domain | php_sq }}' ) . '</span>', $tags_list );
    }
    ?>
  </footer>
</article>
"##;

pub(super) const CONTENT_PAGE_PHP: &str = r##"<?php
/**
 * Template part for displaying page content
 *
 * @package {{ package | raw }}
 */
?>

<article id="post-<?php the_ID(); ?>" <?php post_class(); ?>>
  <header class="entry-header">
    <?php the_title( '<h1 class="entry-title">', '</h1>' ); ?>
  </header>

  <?php if ( has_post_thumbnail() ) : ?>
    <div class="post-thumbnail">
      <?php the_post_thumbnail(); ?>
    </div>
  <?php endif; ?>

  <div class="entry-content">
    <?php
    the_content();
    wp_link_pages();
    ?>
  </div>
</article>
"##;

pub(super) const CUSTOM_HEADER_PHP: &str = r##"<?php
/**
 * Custom header support
 *
 * @package {{ package | raw }}
 */

function {{ prefix | raw }}_custom_header_setup() {
  add_theme_support( 'custom-header', apply_filters( '{{ prefix | raw }}_custom_header_args', array(
    'default-image'      => '',
    'default-text-color' => '000',
    'width'              => 1920,
    'height'             => 500,
    'flex-height'        => true,
    'wp-head-callback'   => '{{ prefix | raw }}_header_style',
  ) ) );
}
add_action( 'after_setup_theme', '{{ prefix | raw }}_custom_header_setup' );

function {{ prefix | raw }}_header_style() {
  $header_text_color = get_header_textcolor();

  if ( ! has_header_image() && get_theme_support( 'custom-header', 'default-text-color' ) === $header_text_color ) {
    return;
  }

  ?>
  <style type="text/css">
    <?php if ( has_header_image() ) : ?>
      .site-header {
        background-image: url(<?php echo esc_url( get_header_image() ); ?>);
        background-size: cover;
        background-position: center;
      }
    <?php endif; ?>

    <?php if ( ! display_header_text() ) : ?>
      .site-title,
      .site-description {
        position: absolute;
        clip: rect(1px, 1px, 1px, 1px);
      }
    <?php else : ?>
      .site-title a,
      .site-description {
        color: #<?php echo esc_attr( $header_text_color ); ?>;
      }
    <?php endif; ?>
  </style>
  <?php
}
"##;

pub(super) const CUSTOMIZER_PHP: &str = r##"<?php
/**
 * Theme Customizer
 *
 * @package {{ package | raw }}
 */

function {{ prefix | raw }}_customize_register( $wp_customize ) {
  $wp_customize->add_section( '{{ prefix | raw }}_colors', array(
    'title'    => __( 'Color Scheme', '{{ text_domain | php_sq }}' ),
    'priority' => 30,
  ) );

  $wp_customize->add_setting( 'primary_color', array(
    'default'           => '{{ primary | php_sq }}',
    'transport'         => 'refresh',
    'sanitize_callback' => 'sanitize_hex_color',
  ) );

  $wp_customize->add_control( new WP_Customize_Color_Control( $wp_customize, 'primary_color', array(
    'label'    => __( 'Primary Color', '{{ text_domain | php_sq }}' ),
    'section'  => '{{ prefix | raw }}_colors',
    'settings' => 'primary_color',
  ) ) );

  $wp_customize->add_setting( 'secondary_color', array(
    'default'           => '{{ secondary | php_sq }}',
    'transport'         => 'refresh',
    'sanitize_callback' => 'sanitize_hex_color',
  ) );

  $wp_customize->add_control( new WP_Customize_Color_Control( $wp_customize, 'secondary_color', array(
    'label'    => __( 'Secondary Color', '{{ text_domain | php_sq }}' ),
    'section'  => '{{ prefix | raw }}_colors',
    'settings' => 'secondary_color',
  ) ) );

  $wp_customize->add_setting( 'hero_title', array(
    'default'           => '{{ title | php_sq }}',
    'sanitize_callback' => 'sanitize_text_field',
  ) );

  $wp_customize->add_control( 'hero_title', array(
    'label'   => __( 'Hero Title', '{{ text_domain | php_sq }}' ),
    'section' => '{{ prefix | raw }}_colors',
    'type'    => 'text',
  ) );

  $wp_customize->add_setting( 'hero_subtitle', array(
    'default'           => '{{ subtitle | php_sq }}',
    'sanitize_callback' => 'sanitize_text_field',
  ) );

  $wp_customize->add_control( 'hero_subtitle', array(
    'label'   => __( 'Hero Subtitle', '{{ text_domain | php_sq }}' ),
    'section' => '{{ prefix | raw }}_colors',
    'type'    => 'text',
  ) );
}
add_action( 'customize_register', '{{ prefix | raw }}_customize_register' );

function {{ prefix | raw }}_customize_css() {
  ?>
  <style type="text/css">
    :root {
      --primary-color: <?php echo esc_attr( get_theme_mod( 'primary_color', '{{ primary | php_sq }}' ) ); ?>;
      --secondary-color: <?php echo esc_attr( get_theme_mod( 'secondary_color', '{{ secondary | php_sq }}' ) ); ?>;
    }
  </style>
  <?php
}
add_action( 'wp_head', '{{ prefix | raw }}_customize_css' );
"##;

pub(super) const TEMPLATE_FUNCTIONS_PHP: &str = r##"<?php
/**
 * Custom template tags
 *
 * @package {{ package | raw }}
 */

if ( ! function_exists( '{{ prefix | raw }}_posted_on' ) ) :
  function {{ prefix | raw }}_posted_on() {
    $time_string = '<time class="entry-date published updated" datetime="%1$s">%2$s</time>';
    if ( get_the_time( 'U' ) !== get_the_modified_time( 'U' ) ) {
      $time_string = '<time class="entry-date published" datetime="%1$s">%2$s</time><time class="updated" datetime="%3$s">%4$s</time>';
    }

    $time_string = sprintf( $time_string,
      esc_attr( get_the_date( DATE_W3C ) ),
      esc_html( get_the_date() ),
      esc_attr( get_the_modified_date( DATE_W3C ) ),
      esc_html( get_the_modified_date() )
    );

    $posted_on = sprintf(
      /* translators: %s: post date */
      esc_html_x( 'Posted on %s', 'post date', '{{ text_domain | php_sq }}' ),
      '<a href="' . esc_url( get_permalink() ) . '" rel="bookmark">' . $time_string . '</a>'
    );

    echo '<span class="posted-on">' . $posted_on . '</span>';
  }
endif;

if ( ! function_exists( '{{ prefix | raw }}_posted_by' ) ) :
  function {{ prefix | raw }}_posted_by() {
    $byline = sprintf(
      /* translators: %s: post author */
      esc_html_x( 'by %s', 'post author', '{{ text_domain | php_sq }}' ),
      '<span class="author vcard"><a class="url fn n" href="' . esc_url( get_author_posts_url( get_the_author_meta( 'ID' ) ) ) . '">' . esc_html( get_the_author() ) . '</a></span>'
    );

    echo '<span class="byline"> ' . $byline . '</span>';
  }
endif;
"##;

pub(super) const SAMPLE_DATA_PHP: &str = r##"<?php
/**
 * Sample pages created when the theme is activated
 *
 * @package {{ package | raw }}
 */

function {{ prefix | raw }}_create_sample_pages() {
  if ( get_page_by_path( 'about' ) ) {
    return;
  }

  $pages = array(
    array( 'About', 'Learn more about {{ company_name_html | php_sq }} and our mission.', 'page-about.php' ),
    array( 'Services', 'Discover our comprehensive range of services.', 'page-services.php' ),
    array( 'Contact', 'Get in touch with us today.', 'page-contact.php' ),
    array( 'Portfolio', 'View our portfolio of work.', 'page-portfolio.php' ),
    array( 'Pricing', 'Choose the perfect plan for your needs.', 'page-pricing.php' ),
    array( 'Team', 'Meet our talented team.', 'page-team.php' ),
  );

  foreach ( $pages as $page ) {
    wp_insert_post( array(
      'post_title'    => $page[0],
      'post_content'  => $page[1],
      'post_status'   => 'publish',
      'post_type'     => 'page',
      'page_template' => $page[2],
    ) );
  }

  if ( ! get_page_by_path( 'home' ) ) {
    $home_id = wp_insert_post( array(
      'post_title'   => 'Home',
      'post_content' => '',
      'post_status'  => 'publish',
      'post_type'    => 'page',
    ) );
    update_option( 'page_on_front', $home_id );
    update_option( 'show_on_front', 'page' );
  }
}
add_action( 'after_switch_theme', '{{ prefix | raw }}_create_sample_pages' );
"##;
