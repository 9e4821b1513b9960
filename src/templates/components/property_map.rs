use maud::{html, Markup, PreEscaped};

// Reads the marker JSON next to it and draws a Leaflet map. Popups are built
// with DOM text nodes so listing text is never parsed as HTML.
const MAP_SCRIPT: &str = r#"
(function () {
  function draw() {
    var el = document.getElementById('property-map');
    var data = document.getElementById('property-map-data');
    if (!el || !data || typeof L === 'undefined' || el.dataset.ready) return;
    el.dataset.ready = '1';
    var markers = JSON.parse(data.textContent);
    var map = L.map(el).setView([-1.2864, 36.8172], 11);
    L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
      attribution: '&copy; OpenStreetMap contributors'
    }).addTo(map);
    markers.forEach(function (m) {
      var box = document.createElement('div');
      var img = document.createElement('img');
      img.src = m.image_url; img.alt = m.title; img.width = 200;
      var title = document.createElement('strong');
      title.textContent = m.title;
      var place = document.createElement('p');
      place.textContent = m.location;
      var price = document.createElement('p');
      price.textContent = m.price + '/' + m.period;
      var facts = document.createElement('p');
      facts.textContent = m.bedrooms + ' bd · ' + m.bathrooms + ' ba · ' + m.size_sqm + ' m²';
      var who = document.createElement('p');
      var call = document.createElement('a');
      call.href = m.tel_href; call.textContent = 'Call';
      var mail = document.createElement('a');
      mail.href = m.mailto_href; mail.textContent = 'Email';
      who.append(m.contact_name + ' ', call, ' ', mail);
      box.append(img, title, place, price, facts, who);
      L.marker([m.lat, m.lng]).addTo(map).bindPopup(box);
    });
  }
  if (document.readyState === 'complete') draw();
  else window.addEventListener('load', draw);
  document.body.addEventListener('htmx:afterSettle', draw);
})();
"#;

/// `markers_json` must be the serialized marker list.
pub fn property_map(markers_json: &str) -> Markup {
    // Keeps the payload from closing its own script element.
    let safe = markers_json.replace("</", "<\\/");

    html! {
        div id="property-map" {}
        script id="property-map-data" type="application/json" { (PreEscaped(safe)) }
        script { (PreEscaped(MAP_SCRIPT)) }
    }
}
