use maud::{html, Markup, PreEscaped};

// Posts the chosen file as the raw request body and reloads on success.
const UPLOAD_SCRIPT: &str = r#"
(function () {
  var MAX = 5 * 1024 * 1024;
  document.querySelectorAll('input[type=file][data-upload-url]').forEach(function (input) {
    if (input.dataset.bound) return;
    input.dataset.bound = '1';
    input.addEventListener('change', function () {
      var file = input.files && input.files[0];
      var out = document.getElementById(input.id + '-status');
      function say(msg) { if (out) out.textContent = msg; }
      if (!file) return;
      if (file.size > MAX) { say('File too large: please upload a file smaller than 5MB'); return; }
      say('Processing...');
      fetch(input.dataset.uploadUrl, {
        method: 'POST',
        headers: {
          'Content-Type': file.type || 'application/octet-stream',
          'X-File-Name': encodeURIComponent(file.name)
        },
        body: file
      }).then(function (resp) {
        if (resp.ok) { window.location.href = resp.url; return; }
        if (resp.status === 413) say('File too large: please upload a file smaller than 5MB');
        else if (resp.status === 415) say('Invalid file type: ' + input.accept);
        else say('Upload failed (' + resp.status + ')');
      }).catch(function () { say('Upload failed'); });
    });
  });
})();
"#;

/// A file picker that uploads immediately to `url`.
pub fn file_upload_field(id: &str, url: &str, accept: &str, label: &str, hint: &str) -> Markup {
    html! {
        div class="form-field" {
            label for=(id) { (label) }
            input type="file" id=(id) accept=(accept) data-upload-url=(url);
            small { (hint) }
            p id=(format!("{id}-status")) class="upload-status" role="status" {}
        }
        script { (PreEscaped(UPLOAD_SCRIPT)) }
    }
}
