//! GET / — embedded demo page driving the two JSON endpoints.

use axum::response::Html;

pub(super) async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>Shopsight</title>
  <style>
    :root { --bg:#0f172a; --card:#111827; --ink:#e5e7eb; --muted:#9ca3af; --accent:#22d3ee; --btn:#1f2937; }
    html,body{margin:0;background:var(--bg);color:var(--ink);font-family:ui-sans-serif,system-ui,-apple-system,Segoe UI,Roboto,Arial,sans-serif;}
    .wrap{max-width:1000px;margin:32px auto;padding:0 16px;}
    .card{background:var(--card);border-radius:16px;padding:20px;box-shadow:0 10px 30px rgb(0 0 0 / 0.25);}
    h1{font-size:24px;margin:0 0 10px;}
    p{color:var(--muted);margin:0 0 16px;}
    .row{display:flex;gap:8px;flex-wrap:wrap;margin:8px 0 16px;}
    input,select{flex:1;min-width:260px;padding:10px 12px;border-radius:12px;border:1px solid #334155;background:#0b1220;color:var(--ink);}
    button{padding:10px 16px;border:1px solid #334155;border-radius:12px;background:var(--btn);color:var(--ink);cursor:pointer}
    button.primary{background:linear-gradient(90deg,#06b6d4,#22d3ee);color:#0b1220;border:none;font-weight:600}
    .cols{display:grid;grid-template-columns:1fr;gap:16px}
    @media (min-width:960px){ .cols{grid-template-columns:380px 1fr} }
    pre{white-space:pre-wrap;word-wrap:break-word;background:#0b1220;border-radius:12px;padding:16px;border:1px solid #334155;max-height:70vh;overflow:auto}
    .hint{font-size:12px;color:var(--muted)}
    .badge{display:inline-block;background:#0b1220;border:1px solid #334155;border-radius:999px;padding:2px 8px;font-size:12px;margin-left:8px}
  </style>
</head>
<body>
  <div class="wrap">
    <div class="card">
      <h1>Shopsight <span class="badge">no API keys</span></h1>
      <p>Enter a storefront URL for structured brand intel, or try the competitor finder.</p>
      <div class="cols">
        <div>
          <label>Store URL</label>
          <div class="row">
            <input id="url" placeholder="https://shop.example" />
          </div>
          <div class="row">
            <button class="primary" onclick="runInsights()">Run /insights</button>
            <select id="limit">
              <option value="3" selected>3 competitors</option>
              <option value="1">1 competitor</option>
              <option value="2">2 competitors</option>
              <option value="4">4 competitors</option>
              <option value="5">5 competitors</option>
            </select>
            <button onclick="runCompetitors()">Run /competitors</button>
          </div>
          <p class="hint">Health check lives at <code>/health</code>.</p>
        </div>
        <div>
          <pre id="out">Output will appear here…</pre>
        </div>
      </div>
    </div>
  </div>
  <script>
    async function runInsights(){
      const u = document.getElementById('url').value.trim();
      if(!u){ return setOut({error:"Please enter a URL"}); }
      setOut("Loading…");
      try{
        const res = await fetch(`/insights?website_url=${encodeURIComponent(u)}`);
        setOut(await res.json());
      }catch(e){ setOut({error:String(e)}) }
    }
    async function runCompetitors(){
      const u = document.getElementById('url').value.trim();
      const limit = document.getElementById('limit').value;
      if(!u){ return setOut({error:"Please enter a URL"}); }
      setOut("Loading…");
      try{
        const res = await fetch(`/competitors?website_url=${encodeURIComponent(u)}&limit=${limit}`);
        setOut(await res.json());
      }catch(e){ setOut({error:String(e)}) }
    }
    function setOut(v){
      const el = document.getElementById('out');
      el.textContent = (typeof v === 'string') ? v : JSON.stringify(v, null, 2);
    }
  </script>
</body>
</html>
"#;
