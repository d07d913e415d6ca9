pub(super) const HEAD_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ lang | attr }}">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{ title }}</title>
  <meta name="description" content="{{ description | attr }}">
  <script src="{{ css_framework_url | attr }}"></script>
  <style>{{ extra_css | raw }}
    :root {
      --brand-primary: {{ primary | raw }};
      --brand-secondary: {{ secondary | raw }};
      --brand-accent: {{ accent | raw }};
      --brand-background: {{ background | raw }};
      --brand-text: {{ text | raw }};
    }
    .brand-text { color: var(--brand-primary); }
    .brand-bg { background: var(--brand-primary); }
    .brand-border { border-color: var(--brand-primary); }
    .brand-gradient { background: linear-gradient(135deg, var(--brand-primary), var(--brand-secondary)); }
    .brand-gradient-text {
      background: linear-gradient(135deg, var(--brand-accent), var(--brand-primary));
      -webkit-background-clip: text; -webkit-text-fill-color: transparent; background-clip: text;
    }
  </style>
</head>"##;

pub(super) const AI_PLATFORM_CSS: &str = r##"
    @keyframes pulse-glow { 0%, 100% { opacity: 0.5; transform: scale(1); } 50% { opacity: 1; transform: scale(1.05); } }
    .pulse-glow { animation: pulse-glow 3s ease-in-out infinite; }
    @keyframes float { 0%, 100% { transform: translateY(0px); } 50% { transform: translateY(-20px); } }
    .float { animation: float 6s ease-in-out infinite; }"##;

pub(super) const LUXURY_FASHION_CSS: &str = r##"
    @import url('https://fonts.googleapis.com/css2?family=Playfair+Display:wght@400;700&display=swap');
    .playfair { font-family: 'Playfair Display', serif; }"##;

pub(super) const AI_PLATFORM_TEMPLATE: &str = r##"{{ head | raw }}
<body class="font-sans overflow-x-hidden text-white" style="background: linear-gradient(135deg, #0a0e27 0%, #1a1f3a 100%);">
  <nav class="fixed top-0 w-full z-50 backdrop-blur-md bg-black/30 border-b border-white/10">
    <div class="max-w-7xl mx-auto px-6 py-4 flex justify-between items-center">
      <div class="text-2xl font-bold brand-gradient-text">{{ company_name }}</div>
      <div class="flex space-x-6">
        <a href="#features" class="text-gray-300 hover:text-white transition">Features</a>
        <a href="#technology" class="text-gray-300 hover:text-white transition">Technology</a>
        <a href="#pricing" class="text-gray-300 hover:text-white transition">Pricing</a>
        <button class="px-6 py-2 brand-gradient rounded-lg hover:shadow-lg transition">Get Started</button>
      </div>
    </div>
  </nav>

  <section class="relative pt-32 pb-20 px-6 overflow-hidden">
    <div class="absolute inset-0 overflow-hidden">
      <div class="absolute w-96 h-96 brand-bg opacity-20 rounded-full blur-3xl top-20 left-10 pulse-glow"></div>
      <div class="absolute w-96 h-96 brand-bg opacity-20 rounded-full blur-3xl bottom-20 right-10 pulse-glow" style="animation-delay: 1.5s;"></div>
    </div>
    <div class="max-w-6xl mx-auto text-center relative z-10">
      <div class="inline-block px-4 py-2 border brand-border rounded-full brand-text text-sm mb-6 float">Powered by Advanced AI</div>
      <h1 class="text-7xl font-bold mb-6 brand-gradient-text">{{ title }}</h1>
      <p class="text-xl text-gray-300 mb-12 max-w-3xl mx-auto">{{ subtitle }}</p>
      <div class="flex justify-center space-x-4">
        <button class="px-8 py-4 brand-gradient rounded-xl font-semibold hover:shadow-2xl transition transform hover:scale-105">Start Free Trial</button>
        <button class="px-8 py-4 border brand-border brand-text rounded-xl font-semibold hover:bg-white/5 transition">Watch Demo</button>
      </div>
    </div>
  </section>

  <section id="features" class="py-20 px-6 relative">
    <div class="max-w-7xl mx-auto">
      <h2 class="text-5xl font-bold text-center mb-16 brand-gradient-text">Advanced AI Capabilities</h2>
      <div class="grid md:grid-cols-3 gap-8">{{ features | raw }}
      </div>
    </div>
  </section>

  <section id="technology" class="py-20 px-6">
    <div class="max-w-6xl mx-auto text-center">
      <h2 class="text-4xl font-bold mb-12">Trusted by Industry Leaders</h2>
      <div class="grid grid-cols-4 gap-12 opacity-50">{{ logos | raw }}
      </div>
    </div>
  </section>

  <section id="pricing" class="py-20 px-6">
    <div class="max-w-4xl mx-auto text-center brand-gradient rounded-3xl p-16">
      <h2 class="text-4xl font-bold mb-4">Ready to Transform Your Business?</h2>
      <p class="text-xl mb-8 opacity-90">Join thousands of companies using AI to stay ahead</p>
      <button class="px-12 py-4 bg-white brand-text rounded-xl font-bold text-lg hover:shadow-2xl transition transform hover:scale-105">Start Your Journey</button>
    </div>
  </section>

  <footer class="py-12 px-6 border-t border-white/10">
    <div class="max-w-6xl mx-auto text-center text-gray-400">
      <p>&copy; {{ year }} {{ company_name }}. {{ tagline }}</p>
    </div>
  </footer>
</body>
</html>
"##;

pub(super) const AI_FEATURE_TEMPLATE: &str = r##"
        <div class="p-8 rounded-2xl bg-white/5 border border-white/10 hover:border-white/30 transition hover:scale-105">
          <div class="w-16 h-16 rounded-xl brand-gradient flex items-center justify-center text-2xl font-bold mb-4">{{ number }}</div>
          <h3 class="text-2xl font-bold mb-3 brand-text">{{ title }}</h3>
          <p class="text-gray-400">Experience cutting-edge AI technology that transforms how you work and make decisions.</p>
        </div>"##;

pub(super) const AI_LOGO_TEMPLATE: &str = r##"
        <div class="text-4xl font-bold text-gray-600">LOGO {{ number }}</div>"##;

pub(super) const LUXURY_FASHION_TEMPLATE: &str = r##"{{ head | raw }}
<body class="font-sans bg-white text-gray-900">
  <nav class="fixed top-0 w-full z-50 backdrop-blur-sm bg-white/90 border-b border-gray-200">
    <div class="max-w-7xl mx-auto px-6 py-6 flex justify-between items-center">
      <div class="text-3xl font-light tracking-widest playfair">{{ company_name }}</div>
      <div class="flex space-x-8 text-sm tracking-wider uppercase">
        <a href="#collection" class="hover:text-gray-600 transition">Collection</a>
        <a href="#about" class="hover:text-gray-600 transition">About</a>
        <a href="#contact" class="hover:text-gray-600 transition">Contact</a>
      </div>
    </div>
  </nav>

  <section class="pt-32 pb-20 px-6 bg-gradient-to-b from-gray-50 to-white">
    <div class="max-w-6xl mx-auto text-center">
      <h1 class="text-7xl font-light mb-6 playfair tracking-wide">{{ title }}</h1>
      <p class="text-xl text-gray-600 mb-12 font-light tracking-wide">{{ subtitle }}</p>
      <a href="#collection" class="inline-block px-12 py-4 bg-black text-white font-light tracking-widest text-sm uppercase hover:bg-gray-900 transition">Explore Collection</a>
    </div>
  </section>

  <section id="collection" class="py-20 px-6">
    <div class="max-w-7xl mx-auto">
      <h2 class="text-5xl font-light text-center mb-16 playfair">Featured Collection</h2>
      <div class="grid md:grid-cols-3 gap-8">{{ collection | raw }}
      </div>
    </div>
  </section>

  <section id="about" class="py-32 px-6 bg-black text-white">
    <div class="max-w-4xl mx-auto text-center">
      <h2 class="text-5xl font-light mb-6 playfair">Timeless Elegance</h2>
      <p class="text-xl font-light mb-12 text-gray-300">Experience luxury crafted to perfection</p>
      <button id="contact" class="px-12 py-4 border-2 brand-border font-light tracking-widest text-sm uppercase hover:bg-white hover:text-black transition">Book Consultation</button>
    </div>
  </section>

  <footer class="py-16 px-6 bg-gray-50 border-t">
    <div class="max-w-6xl mx-auto text-center text-gray-600">
      <p class="text-sm tracking-widest uppercase">&copy; {{ year }} {{ company_name }}. {{ tagline }}</p>
    </div>
  </footer>
</body>
</html>
"##;

pub(super) const FASHION_ITEM_TEMPLATE: &str = r##"
        <div class="group cursor-pointer">
          <div class="aspect-[3/4] bg-gray-100 mb-6 overflow-hidden">
            <div class="w-full h-full bg-gradient-to-br from-gray-200 to-gray-300 flex items-center justify-center text-gray-400 group-hover:scale-110 transition-transform duration-700">
              <svg class="w-24 h-24" fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="1" d="M16 11V7a4 4 0 00-8 0v4M5 9h14l1 12H4L5 9z" />
              </svg>
            </div>
          </div>
          <h3 class="text-xl mb-2 playfair">{{ name }}</h3>
          <p class="text-gray-600 text-sm tracking-wider">From $2,500</p>
        </div>"##;

pub(super) const FINE_DINING_TEMPLATE: &str = r##"{{ head | raw }}
<body class="font-serif bg-zinc-900 text-gray-100">
  <nav class="fixed top-0 w-full z-50 backdrop-blur-md bg-zinc-900/80 border-b border-white/10">
    <div class="max-w-7xl mx-auto px-6 py-6 flex justify-between items-center">
      <div class="text-3xl font-light tracking-wider brand-text">{{ company_name }}</div>
      <div class="flex space-x-8">
        <a href="#menu" class="text-gray-300 hover:text-white transition">Menu</a>
        <a href="#experience" class="text-gray-300 hover:text-white transition">Experience</a>
        <a href="#reservations" class="px-6 py-2 brand-bg text-white rounded hover:opacity-90 transition">Reserve Table</a>
      </div>
    </div>
  </nav>

  <section class="relative h-screen flex items-center justify-center">
    <div class="absolute inset-0 bg-gradient-to-b from-black/70 to-zinc-900"></div>
    <div class="relative z-10 text-center px-6">
      <h1 class="text-7xl font-light mb-6 brand-text">{{ title }}</h1>
      <p class="text-2xl text-gray-300 mb-12 font-light italic">{{ subtitle }}</p>
      <div class="flex justify-center space-x-6">
        <a href="#reservations" class="px-10 py-4 brand-bg text-white rounded-lg hover:opacity-90 transition">Book Now</a>
        <a href="#menu" class="px-10 py-4 border brand-border brand-text rounded-lg hover:bg-white/5 transition">View Menu</a>
      </div>
    </div>
  </section>

  <section id="menu" class="py-32 px-6 bg-zinc-800">
    <div class="max-w-5xl mx-auto">
      <h2 class="text-5xl font-light text-center mb-20 brand-text">Our Menu</h2>
      <div class="space-y-16">{{ courses | raw }}
      </div>
    </div>
  </section>

  <section id="experience" class="py-32 px-6 bg-gradient-to-b from-black/40 to-zinc-900">
    <div id="reservations" class="max-w-4xl mx-auto text-center">
      <h2 class="text-4xl font-light mb-6">An Unforgettable Experience</h2>
      <p class="text-xl text-gray-300 mb-12 font-light">Michelin-starred cuisine in an intimate setting</p>
      <button class="px-12 py-4 brand-bg text-white rounded-lg hover:opacity-90 transition text-lg">Reserve Your Table</button>
    </div>
  </section>

  <footer class="py-12 px-6 border-t border-white/10">
    <div class="max-w-6xl mx-auto text-center text-gray-400">
      <p>&copy; {{ year }} {{ company_name }}. {{ tagline }}</p>
    </div>
  </footer>
</body>
</html>
"##;

pub(super) const DINING_COURSE_TEMPLATE: &str = r##"
        <div>
          <h3 class="text-3xl font-light mb-8 brand-text border-b border-white/10 pb-4">{{ course }}</h3>
          <div class="grid gap-8">{{ dishes | raw }}
          </div>
        </div>"##;

pub(super) const DINING_DISH_TEMPLATE: &str = r##"
            <div class="flex justify-between items-start">
              <div>
                <h4 class="text-xl mb-2">Signature Dish {{ number }}</h4>
                <p class="text-gray-400 italic">Exquisite ingredients crafted to perfection</p>
              </div>
              <span class="text-xl brand-text font-light">${{ price }}</span>
            </div>"##;

pub(super) const REAL_ESTATE_TEMPLATE: &str = r##"{{ head | raw }}
<body class="font-sans bg-gray-50">
  <nav class="bg-white shadow-sm sticky top-0 z-50">
    <div class="max-w-7xl mx-auto px-6 py-4 flex justify-between items-center">
      <div class="text-2xl font-bold brand-text">{{ company_name }}</div>
      <div class="flex space-x-8">
        <a href="#properties" class="text-gray-700 hover:text-gray-900 transition">Properties</a>
        <a href="#services" class="text-gray-700 hover:text-gray-900 transition">Services</a>
        <a href="#contact" class="px-6 py-2 brand-bg text-white rounded-lg hover:opacity-90 transition">Contact Agent</a>
      </div>
    </div>
  </nav>

  <section class="py-20 px-6 bg-gradient-to-br from-gray-100 to-white">
    <div class="max-w-6xl mx-auto text-center">
      <h1 class="text-6xl font-bold mb-6 text-gray-900">{{ title }}</h1>
      <p class="text-xl text-gray-600 mb-12">{{ subtitle }}</p>
      <form class="bg-white rounded-2xl shadow-xl p-8 max-w-4xl mx-auto" onsubmit="return false;">
        <div class="grid md:grid-cols-4 gap-4">
          <input type="text" name="location" placeholder="Location" aria-label="Location" class="px-4 py-3 border rounded-lg">
          <select name="type" aria-label="Property type" class="px-4 py-3 border rounded-lg">
            <option>Property Type</option>
            <option>House</option>
            <option>Apartment</option>
          </select>
          <input type="text" name="price" placeholder="Price Range" aria-label="Price range" class="px-4 py-3 border rounded-lg">
          <button type="submit" class="px-6 py-3 brand-bg text-white rounded-lg hover:opacity-90 transition font-semibold">Search</button>
        </div>
      </form>
    </div>
  </section>

  <section id="properties" class="py-20 px-6">
    <div class="max-w-7xl mx-auto">
      <h2 class="text-4xl font-bold mb-12 text-center">Featured Properties</h2>
      <div class="grid md:grid-cols-3 gap-8">{{ properties | raw }}
      </div>
    </div>
  </section>

  <section id="services" class="py-20 px-6 brand-bg text-white">
    <div id="contact" class="max-w-4xl mx-auto text-center">
      <h2 class="text-4xl font-bold mb-6">Find Your Dream Home Today</h2>
      <p class="text-xl mb-8 opacity-90">Work with experienced agents who know the market</p>
      <button class="px-12 py-4 bg-white brand-text rounded-xl font-bold text-lg hover:shadow-2xl transition">Schedule Consultation</button>
    </div>
  </section>

  <footer class="py-12 px-6 bg-gray-900 text-gray-400">
    <div class="max-w-6xl mx-auto text-center">
      <p>&copy; {{ year }} {{ company_name }}. {{ tagline }}</p>
    </div>
  </footer>
</body>
</html>
"##;

pub(super) const PROPERTY_TEMPLATE: &str = r##"
        <div class="bg-white rounded-2xl overflow-hidden shadow-lg hover:shadow-2xl transition group cursor-pointer">
          <div class="aspect-video brand-gradient relative overflow-hidden">
            <div class="absolute top-4 right-4 px-3 py-1 brand-bg text-white text-sm rounded-full">For Sale</div>
            <div class="w-full h-full flex items-center justify-center text-white text-6xl font-bold opacity-30 group-hover:scale-110 transition-transform duration-500">{{ number }}</div>
          </div>
          <div class="p-6">
            <h3 class="text-2xl font-bold mb-2">${{ price }}</h3>
            <p class="text-gray-600 mb-4">Modern Luxury Home</p>
            <div class="flex space-x-4 text-sm text-gray-500">
              <span>3 Beds</span> <span>2 Baths</span> <span>2,400 sqft</span>
            </div>
          </div>
        </div>"##;
